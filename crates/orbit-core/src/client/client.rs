use std::sync::{Arc, RwLock};

use reqwest::header::{self, HeaderValue};

use super::internal::InternalClient;
use crate::{
    client::{client_settings::ClientSettings, internal::ApiConfiguration},
    session::SessionIdentity,
};

/// The main struct to interact with the Orbit SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so all mutable state lives behind an Arc as part of the
    // [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Orbit client.
    pub fn new(settings_input: Option<ClientSettings>) -> Self {
        let settings = settings_input.unwrap_or_default();

        let headers = build_default_headers(&settings);
        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        let api = ApiConfiguration {
            base_path: settings.api_url,
            user_agent: Some(settings.user_agent),
            client: http_client,
            session_token: None,
        };

        Self {
            internal: Arc::new(InternalClient {
                session: RwLock::new(SessionIdentity::Unknown),
                api_configuration: RwLock::new(Arc::new(api)),
            }),
        }
    }

    /// Returns the session identity as currently known.
    pub fn session_identity(&self) -> SessionIdentity {
        self.internal.get_session_identity()
    }

    /// Replaces the ambient session identity.
    ///
    /// This is the replace-session callback handed to the authentication
    /// subsystem and the profile-edit collaborator.
    pub fn replace_session(&self, identity: SessionIdentity) {
        self.internal.replace_session(identity);
    }
}

fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    if let Some(version) = &settings.client_version {
        if let Ok(value) = HeaderValue::from_str(version) {
            headers.insert("Client-Version", value);
        }
    }

    headers
}
