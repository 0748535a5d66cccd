use orbit_core::{ApiError, Client, MissingFieldError, require};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    ProviderBinding,
    api::{HasPasswordResponse, LinkedProvidersResponse},
    facts::AccountFactsSource,
};

/// Error type for the account-facts fetches.
#[derive(Debug, Error)]
pub enum AccountFactsError {
    /// API error occurred during the request
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A required field was missing in the response
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

/// HTTP client for the account endpoints of the settings page.
#[derive(Clone)]
pub struct AccountClient {
    pub(crate) client: Client,
}

impl AccountClient {
    /// Constructs a new `AccountClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AccountFactsError> {
        let configuration = self.client.internal.get_api_configuration();

        let mut request = configuration
            .client
            .get(format!("{}{}", configuration.base_path, path))
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(session_token) = &configuration.session_token {
            request = request.bearer_auth(session_token);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.map_err(ApiError::from)?;
            return Err(ApiError::ResponseContent { status, message }.into());
        }

        Ok(response.json().await.map_err(ApiError::from)?)
    }
}

#[async_trait::async_trait]
impl AccountFactsSource for AccountClient {
    async fn linked_providers(&self) -> Result<Vec<ProviderBinding>, AccountFactsError> {
        let response: LinkedProvidersResponse = self.get_json("/user/linked-auth-providers").await?;
        Ok(response.data)
    }

    async fn has_password(&self) -> Result<bool, AccountFactsError> {
        let response: HasPasswordResponse = self.get_json("/user/has-password").await?;
        Ok(require!(response.has_password))
    }
}
