use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target and identification of the
/// Orbit client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use orbit_core::ClientSettings;
/// let settings = ClientSettings {
///     api_url: "https://api.orbitapp.dev".to_string(),
///     user_agent: "Orbit Rust-SDK".to_string(),
///     client_version: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct ClientSettings {
    /// The api url of the targeted Orbit instance. Defaults to `https://api.orbitapp.dev`
    pub api_url: String,
    /// The user_agent to send to Orbit. Defaults to `Orbit Rust-SDK`
    pub user_agent: String,
    /// Client application version to send to Orbit.
    pub client_version: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.orbitapp.dev".into(),
            user_agent: "Orbit Rust-SDK".into(),
            client_version: None,
        }
    }
}
