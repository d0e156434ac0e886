// Integration tests for `HassClient` using wiremock.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hass_api::{ClientConfig, Command, HassClient, Outcome, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const TOKEN: &str = "test-token";

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(
        Some(format!("{}/api", server.uri())),
        Some(SecretString::from(TOKEN.to_owned())),
    )
}

async fn setup() -> (MockServer, HassClient) {
    let server = MockServer::start().await;
    let client = HassClient::new(&config_for(&server)).unwrap();
    (server, client)
}

fn to_json(outcome: &Outcome) -> Value {
    serde_json::to_value(outcome).unwrap()
}

fn keys(value: &Value) -> Vec<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

// ── Transport ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_sends_bearer_token_and_json_content_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "API running."})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client.check_api().await;
    assert_eq!(
        to_json(&outcome),
        json!({"success": true, "data": {"message": "API running."}})
    );
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(
        Some(format!("{}/api/", server.uri())),
        Some(SecretString::from(TOKEN.to_owned())),
    );
    let client = HassClient::new(&config).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "2024.6.0"})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client.get_config().await;
    assert_eq!(outcome.data().unwrap()["version"], "2024.6.0");
}

// ── HTTP failures ───────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_carries_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/states/light.nowhere"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Entity not found."})))
        .mount(&server)
        .await;

    let outcome = client.get_state("light.nowhere").await;
    assert_eq!(
        to_json(&outcome),
        json!({
            "success": false,
            "error": {
                "message": "Request failed with status code 404",
                "status": 404,
                "statusText": "Not Found",
                "data": {"message": "Entity not found."}
            }
        })
    );
}

#[tokio::test]
async fn test_unauthorized_text_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/states"))
        .respond_with(ResponseTemplate::new(401).set_body_string("401: Unauthorized"))
        .mount(&server)
        .await;

    let outcome = client.get_states().await;
    let failure = outcome.failure().unwrap();
    assert_eq!(failure.status, Some(401));
    assert_eq!(failure.data, Some(json!("401: Unauthorized")));
    assert!(failure.config.is_none());
}

#[tokio::test]
async fn test_server_error_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/config/core/check_config"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let value = to_json(&client.check_config().await);
    assert_eq!(value["error"]["status"], 500);
    assert_eq!(value["error"]["statusText"], "Internal Server Error");
    assert!(value["error"].get("data").is_none());
}

#[tokio::test]
async fn test_failure_reports_missing_token() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(Some(format!("{}/api", server.uri())), None);
    let client = HassClient::new(&config).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(401).set_body_string("401: Unauthorized"))
        .mount(&server)
        .await;

    let value = to_json(&client.get_events().await);
    assert_eq!(value["error"]["config"], json!({"missing": ["HASS_API_TOKEN"]}));
}

#[tokio::test]
async fn test_success_never_reports_missing_config() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(Some(format!("{}/api", server.uri())), None);
    let client = HassClient::new(&config).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/discovery_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"location_name": "Home"})))
        .mount(&server)
        .await;

    let value = to_json(&client.get_discovery_info().await);
    assert_eq!(
        value,
        json!({"success": true, "data": {"location_name": "Home"}})
    );
}

#[tokio::test]
async fn test_missing_url_and_token_is_a_network_failure() {
    let client = HassClient::new(&ClientConfig::new(None, None)).unwrap();

    let value = to_json(&client.get_states().await);
    assert_eq!(
        value,
        json!({
            "success": false,
            "error": {
                "message": "No response received from Home Assistant",
                "type": "network",
                "config": {"missing": ["HASS_API_URL", "HASS_API_TOKEN"]}
            }
        })
    );
}

// ── Services ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_call_service_posts_data() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/services/light/turn_on"))
        .and(body_json(json!({"entity_id": "light.kitchen", "brightness": 200})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"entity_id": "light.kitchen", "state": "on"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client
        .call_service(
            "light",
            "turn_on",
            json!({"entity_id": "light.kitchen", "brightness": 200}),
        )
        .await;
    let value = to_json(&outcome);

    assert_eq!(keys(&value), vec!["success", "service", "serviceData", "data"]);
    assert_eq!(value["service"], "light.turn_on");
    assert_eq!(value["serviceData"]["brightness"], 200);
    assert_eq!(value["data"][0]["state"], "on");
}

#[tokio::test]
async fn test_call_service_error_status_is_not_assumed_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/services/light/explode"))
        .respond_with(ResponseTemplate::new(400).set_body_string("400: Bad Request"))
        .mount(&server)
        .await;

    let outcome = client.call_service("light", "explode", json!({})).await;
    assert_eq!(outcome.failure().unwrap().status, Some(400));
}

#[tokio::test]
async fn test_services_filtered_by_domain() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "light": {"turn_on": {}, "turn_off": {}},
            "switch": {"toggle": {}}
        })))
        .mount(&server)
        .await;

    let value = to_json(&client.get_services(Some("switch")).await);
    assert_eq!(
        value,
        json!({"success": true, "domain": "switch", "data": {"switch": {"toggle": {}}}})
    );

    let value = to_json(&client.get_services(Some("climate")).await);
    assert_eq!(value["data"], json!({}));

    let value = to_json(&client.get_services(None).await);
    assert_eq!(keys(&value), vec!["success", "data"]);
    assert_eq!(keys(&value["data"]), vec!["light", "switch"]);
}

// ── States ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_set_state_metadata_order() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/states/sensor.kitchen_temp"))
        .and(body_json(json!({"state": "21.5", "attributes": {"unit_of_measurement": "°C"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "entity_id": "sensor.kitchen_temp",
            "state": "21.5"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let value = to_json(
        &client
            .set_state(
                "sensor.kitchen_temp",
                "21.5",
                json!({"unit_of_measurement": "°C"}),
            )
            .await,
    );
    assert_eq!(
        keys(&value),
        vec!["success", "entityId", "state", "attributes", "data"]
    );
    assert_eq!(value["data"]["state"], "21.5");
}

#[tokio::test]
async fn test_entities_filtered_by_domain_prefix() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"entity_id": "light.kitchen", "state": "on"},
            {"entity_id": "light_sensor.porch", "state": "12"},
            {"entity_id": "switch.fan", "state": "off"}
        ])))
        .mount(&server)
        .await;

    let value = to_json(&client.get_entities(Some("light")).await);
    assert_eq!(
        value,
        json!({
            "success": true,
            "domain": "light",
            "data": [{"entity_id": "light.kitchen", "state": "on"}]
        })
    );

    let value = to_json(&client.get_entities(None).await);
    assert_eq!(value["domain"], Value::Null);
    assert_eq!(value["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_domain_means_no_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"entity_id": "light.a", "state": "on"},
            {"entity_id": "switch.b", "state": "off"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"light": {"turn_on": {}}})))
        .mount(&server)
        .await;

    let value = to_json(&client.get_entities(Some("")).await);
    assert_eq!(value["domain"], Value::Null);
    assert_eq!(value["data"].as_array().unwrap().len(), 2);

    let value = to_json(&client.get_services(Some("")).await);
    assert_eq!(
        value,
        json!({"success": true, "data": {"light": {"turn_on": {}}}})
    );
}

#[tokio::test]
async fn test_entities_unexpected_payload_is_a_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "nope"})))
        .mount(&server)
        .await;

    let outcome = client.get_entities(Some("light")).await;
    assert_eq!(
        outcome.failure().unwrap().message,
        "Unexpected response from Home Assistant: expected a list of entities"
    );
}

// ── History & logbook ───────────────────────────────────────────────

#[tokio::test]
async fn test_history_with_timestamp_and_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/history/period/2024-06-01T00:00:00Z"))
        .and(query_param("filter_entity_id", "sensor.temp"))
        .and(query_param_is_missing("end_time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[]])))
        .expect(1)
        .mount(&server)
        .await;

    let value = to_json(
        &client
            .get_history(Some("2024-06-01T00:00:00Z"), Some("sensor.temp"), None)
            .await,
    );
    assert_eq!(
        value,
        json!({
            "success": true,
            "timestamp": "2024-06-01T00:00:00Z",
            "filterEntityId": "sensor.temp",
            "endTime": null,
            "data": [[]]
        })
    );
}

#[tokio::test]
async fn test_logbook_without_timestamp() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logbook"))
        .and(query_param("entity", "light.kitchen"))
        .and(query_param("end_time", "2024-06-02T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let value = to_json(
        &client
            .get_logbook(None, Some("light.kitchen"), Some("2024-06-02T00:00:00Z"))
            .await,
    );
    assert_eq!(keys(&value), vec!["success", "entityId", "endTime", "data"]);
}

#[tokio::test]
async fn test_history_empty_options_are_unset() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/history/period"))
        .and(query_param_is_missing("filter_entity_id"))
        .and(query_param_is_missing("end_time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let value = to_json(&client.get_history(Some(""), Some(""), Some("")).await);
    assert_eq!(
        value,
        json!({"success": true, "filterEntityId": null, "endTime": null, "data": []})
    );
}

// ── Camera, template, webhook, calendars ────────────────────────────

#[tokio::test]
async fn test_camera_snapshot_is_base64() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/camera_proxy/camera.front_door"))
        .and(query_param("width", "640"))
        .and(query_param_is_missing("height"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0xff_u8, 0xd8, 0xff], "image/jpeg"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let value = to_json(
        &client
            .get_camera_snapshot("camera.front_door", Some(640), Some(0))
            .await,
    );
    assert_eq!(
        value,
        json!({
            "success": true,
            "entityId": "camera.front_door",
            "width": 640,
            "height": null,
            "data": {"image": "/9j/", "contentType": "image/jpeg"}
        })
    );
}

#[tokio::test]
async fn test_render_template() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/template"))
        .and(body_json(json!({"template": "{{ states('light.kitchen') }}"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("on"))
        .mount(&server)
        .await;

    let value = to_json(&client.render_template("{{ states('light.kitchen') }}").await);
    assert_eq!(value["template"], "{{ states('light.kitchen') }}");
    assert_eq!(value["data"], json!({"rendered": "on"}));
}

#[tokio::test]
async fn test_trigger_webhook_with_empty_response() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/webhook/doorbell"))
        .and(body_json(json!({"pressed": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let value = to_json(&client.trigger_webhook("doorbell", &json!({"pressed": true})).await);
    assert_eq!(
        value,
        json!({"success": true, "webhookId": "doorbell", "data": ""})
    );
}

#[tokio::test]
async fn test_calendar_events_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/calendars/calendar.family"))
        .and(query_param("start", "2024-06-01T00:00:00Z"))
        .and(query_param("end", "2024-06-08T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"summary": "Dentist"}])))
        .mount(&server)
        .await;

    let value = to_json(
        &client
            .get_calendar_events(
                "calendar.family",
                Some("2024-06-01T00:00:00Z"),
                Some("2024-06-08T00:00:00Z"),
            )
            .await,
    );
    assert_eq!(
        keys(&value),
        vec!["success", "entityId", "start", "end", "data"]
    );
    assert_eq!(value["data"][0]["summary"], "Dentist");
}

#[tokio::test]
async fn test_error_log_is_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/error_log"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2024-06-01 ERROR (MainThread) boom\n"))
        .mount(&server)
        .await;

    let outcome = client.execute(Command::GetErrorLog).await;
    assert_eq!(
        outcome.data(),
        Some(&json!("2024-06-01 ERROR (MainThread) boom\n"))
    );
}

#[tokio::test]
async fn test_execute_routes_calendars() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/calendars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"entity_id": "calendar.family", "name": "Family"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client.execute(Command::GetCalendars).await;
    assert!(outcome.is_success());
}

// ── Timeouts ────────────────────────────────────────────────────────

async fn slow_setup() -> (MockServer, HassClient) {
    let server = MockServer::start().await;
    let config = config_for(&server)
        .with_transport(TransportConfig::default().with_timeout(Duration::from_millis(200)));
    let client = HassClient::new(&config).unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    (server, client)
}

#[tokio::test]
async fn test_call_service_timeout_assumes_success() {
    let (_server, client) = slow_setup().await;

    let value = to_json(
        &client
            .call_service("homeassistant", "restart", json!({}))
            .await,
    );
    assert_eq!(
        value,
        json!({
            "success": true,
            "service": "homeassistant.restart",
            "serviceData": {},
            "note": "No response received from Home Assistant; assuming success",
            "data": null
        })
    );
}

#[tokio::test]
async fn test_other_operations_time_out_as_network_failure() {
    let (_server, client) = slow_setup().await;

    let value = to_json(&client.get_states().await);
    assert_eq!(value["error"]["type"], "network");
    assert_eq!(
        value["error"]["message"],
        "No response received from Home Assistant"
    );

    let value = to_json(&client.trigger_webhook("doorbell", &json!({})).await);
    assert_eq!(value["success"], false);
}
