use std::sync::Arc;

use orbit_core::Client;

use crate::password_confirmation::{
    PasswordConfirmationClient, PasswordConfirmationMachine, VerificationToken,
};

/// Subclient containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Starts a password-addition confirmation flow for the token carried in
    /// the verification link. The returned machine owns the token for its
    /// whole lifetime.
    pub fn password_confirmation(&self, token: VerificationToken) -> PasswordConfirmationMachine {
        let actions = Arc::new(PasswordConfirmationClient::new(self.client.clone()));
        PasswordConfirmationMachine::new(token, actions)
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
