//! Translate global flags into a `hass_api::ClientConfig`.

use secrecy::SecretString;

use hass_api::{ClientConfig, TlsMode, TransportConfig};

use crate::cli::GlobalOpts;

/// Build the client configuration from `--url`, `--token`, and `--insecure`
/// (or their `HASS_*` environment fallbacks).
///
/// Absent values are not an error here; they surface as `config.missing`
/// on any failure the request produces.
pub fn client_config(global: &GlobalOpts) -> ClientConfig {
    let tls = if global.insecure {
        TlsMode::DangerAcceptInvalid
    } else {
        TlsMode::System
    };

    ClientConfig::new(
        global.url.clone(),
        global.token.clone().map(SecretString::from),
    )
    .with_transport(TransportConfig::default().with_tls(tls))
}
