use orbit_core::{ApiError, Client};
use tracing::debug;

use crate::password_confirmation::{
    ActionResult, PasswordAdditionActions, VerificationToken, api::PasswordAdditionActionPayload,
};

/// HTTP implementation of the confirm/discard operations.
///
/// Both endpoints answer with an [`ActionResult`] body; a semantic rejection
/// (expired or already-consumed token) is a negative result, not an error.
#[derive(Clone)]
pub struct PasswordConfirmationClient {
    pub(crate) client: Client,
}

impl PasswordConfirmationClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    async fn post_action(
        &self,
        path: &str,
        token: &VerificationToken,
    ) -> Result<ActionResult, ApiError> {
        let configuration = self.client.internal.get_api_configuration();

        let mut request = configuration
            .client
            .post(format!("{}{}", configuration.base_path, path))
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .json(&PasswordAdditionActionPayload { token });

        if let Some(session_token) = &configuration.session_token {
            request = request.bearer_auth(session_token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let result: ActionResult = response.json().await?;
            debug!(success = result.success, "Password addition action settled");
            return Ok(result);
        }

        // Expected rejections (invalid or expired token) come back as a
        // regular ActionResult body on a 4xx status. Anything else is a
        // transport fault.
        let body = response.text().await?;
        match serde_json::from_str::<ActionResult>(&body) {
            Ok(result) => Ok(result),
            Err(_) => Err(ApiError::ResponseContent {
                status,
                message: body,
            }),
        }
    }
}

#[async_trait::async_trait]
impl PasswordAdditionActions for PasswordConfirmationClient {
    async fn confirm(&self, token: &VerificationToken) -> Result<ActionResult, ApiError> {
        self.post_action("/user/password/confirm-new", token).await
    }

    async fn discard(&self, token: &VerificationToken) -> Result<ActionResult, ApiError> {
        self.post_action("/user/password/discard-new", token).await
    }
}

#[cfg(test)]
mod tests {
    use orbit_test::{start_api_mock, test_client};
    use wiremock::{Mock, ResponseTemplate, matchers};

    use super::*;

    const TEST_TOKEN: &str = "abc123";

    #[tokio::test]
    async fn test_confirm_parses_success_body() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/user/password/confirm-new"))
            .and(matchers::body_json(serde_json::json!({"token": TEST_TOKEN})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Password confirmed"
            })));
        let (server, _config) = start_api_mock(vec![mock]).await;

        let client = PasswordConfirmationClient::new(test_client(&server));
        let result = client
            .confirm(&VerificationToken::new(TEST_TOKEN))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.message, "Password confirmed");
    }

    #[tokio::test]
    async fn test_discard_surfaces_semantic_rejection_from_error_status() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/user/password/discard-new"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "success": false,
                "message": "Token expired"
            })));
        let (server, _config) = start_api_mock(vec![mock]).await;

        let client = PasswordConfirmationClient::new(test_client(&server));
        let result = client
            .discard(&VerificationToken::new("expired"))
            .await
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.message, "Token expired");
    }

    #[tokio::test]
    async fn test_unparseable_error_body_is_a_transport_fault() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/user/password/confirm-new"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"));
        let (server, _config) = start_api_mock(vec![mock]).await;

        let client = PasswordConfirmationClient::new(test_client(&server));
        let error = client
            .confirm(&VerificationToken::new(TEST_TOKEN))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::ResponseContent { status, .. }
            if status == reqwest::StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_session_token_is_attached_when_present() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/user/password/confirm-new"))
            .and(matchers::header("Authorization", "Bearer session-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Password confirmed"
            })));
        let (server, _config) = start_api_mock(vec![mock]).await;

        let core = test_client(&server);
        core.internal.set_session_token(Some("session-token".into()));

        let client = PasswordConfirmationClient::new(core);
        let result = client
            .confirm(&VerificationToken::new(TEST_TOKEN))
            .await
            .unwrap();

        assert!(result.success);
    }
}
