//! Shared wiremock harness for the integration suites.
//!
//! Every test constructs its own client against its own mock endpoint,
//! so suites are isolated without any process-wide state.

use meridian_client::MeridianClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token handed out by the standard login mount.
pub const TEST_TOKEN: &str = "T";

pub const TEST_BEARER: &str = "Bearer T";

/// Mount a login handler answering the standard exchange with a token
/// valid for one hour.
pub async fn mount_login(server: &MockServer) {
    mount_login_expiring_in(server, 3600).await;
}

/// Mount a login handler whose token expires `ttl_secs` from now.
pub async fn mount_login_expiring_in(server: &MockServer, ttl_secs: i64) {
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body(ttl_secs)))
        .mount(server)
        .await;
}

/// Standard login response body with the given time-to-live.
pub fn login_body(ttl_secs: i64) -> serde_json::Value {
    serde_json::json!({
        "accessToken": TEST_TOKEN,
        "expiresAt": chrono::Utc::now().timestamp() + ttl_secs,
        "tokenType": "Bearer",
    })
}

/// Client wired against the mock endpoint.
pub fn client_for(server: &MockServer) -> MeridianClient {
    MeridianClient::builder()
        .access_key("test-access-key")
        .secret_key("test-secret-key")
        .endpoint(server.uri())
        .build()
        .expect("client should build against the mock endpoint")
}
