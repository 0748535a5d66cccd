use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::session::SessionIdentity;

/// Configuration used by the sub-clients for reaching the Orbit API.
#[derive(Clone)]
pub struct ApiConfiguration {
    pub base_path: String,
    pub user_agent: Option<String>,
    pub client: reqwest::Client,
    /// Session bearer token attached to authenticated endpoints, when present.
    pub session_token: Option<String>,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

#[allow(missing_docs)]
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) session: RwLock<SessionIdentity>,

    /// Use Client::get_api_configuration() to access this.
    pub(crate) api_configuration: RwLock<Arc<ApiConfiguration>>,
}

impl InternalClient {
    /// Returns the current API configuration.
    pub fn get_api_configuration(&self) -> Arc<ApiConfiguration> {
        self.api_configuration
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Attaches or clears the session token sent with authenticated requests.
    pub fn set_session_token(&self, token: Option<String>) {
        let mut config = self
            .api_configuration
            .write()
            .expect("RwLock is not poisoned");
        let mut updated = (**config).clone();
        updated.session_token = token;
        *config = Arc::new(updated);
    }

    /// Returns the session identity as currently known.
    pub fn get_session_identity(&self) -> SessionIdentity {
        self.session
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Replaces the ambient session identity.
    ///
    /// Reserved for the authentication subsystem and the profile-edit
    /// collaborator; flow code only reads the identity.
    pub fn replace_session(&self, identity: SessionIdentity) {
        debug!("Replacing session identity");
        *self.session.write().expect("RwLock is not poisoned") = identity;
    }
}
