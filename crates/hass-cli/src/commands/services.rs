//! `call`: build the service data from `--data` and `--entity-id`.

use serde_json::{Map, Value};

use crate::cli::CallArgs;
use crate::commands::util::parse_json;
use crate::error::CliError;

pub fn call(args: CallArgs) -> Result<hass_api::Command, CliError> {
    let data = service_data(&args.data, args.entity_id)?;
    Ok(hass_api::Command::CallService {
        domain: args.domain,
        service: args.service,
        data,
    })
}

/// Merge `--data` over `{"entity_id": ...}`. The result is always an object.
fn service_data(raw: &str, entity_id: Option<String>) -> Result<Value, CliError> {
    let fields = spread(parse_json(raw, "data")?);

    let mut data = Map::new();
    if let Some(entity_id) = entity_id.filter(|id| !id.is_empty()) {
        data.insert("entity_id".into(), Value::String(entity_id));
    }
    data.extend(fields);
    Ok(Value::Object(data))
}

/// The fields a non-object value contributes when merged into an object:
/// arrays and strings by index, scalars and `null` nothing.
fn spread(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(fields) => fields,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}
