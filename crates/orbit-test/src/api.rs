use orbit_core::{ApiConfiguration, Client, ClientSettings};

/// Starts a wiremock server with the given mocks registered and returns it
/// together with an [`ApiConfiguration`] pointing at it.
///
/// Keep the returned `server` alive for the whole test; call expectations
/// are verified when it drops.
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ApiConfiguration) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = ApiConfiguration {
        base_path: server.uri(),
        user_agent: Some("test-agent".to_string()),
        client: reqwest::Client::new(),
        session_token: None,
    };

    (server, config)
}

/// A [`Client`] whose API base points at the given mock server.
pub fn test_client(server: &wiremock::MockServer) -> Client {
    Client::new(Some(ClientSettings {
        api_url: server.uri(),
        user_agent: "Orbit Rust-SDK [TEST]".into(),
        client_version: None,
    }))
}
