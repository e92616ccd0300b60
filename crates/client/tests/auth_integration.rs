//! Authentication lifecycle: lazy login, token reuse, expiry, and the
//! header invariants every non-login request must satisfy.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use meridian_client::MeridianError;
use reqwest::StatusCode;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn empty_project_page() -> serde_json::Value {
    serde_json::json!({"data": [], "totalCount": 0})
}

fn project_list_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/v2/runners/projects/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_project_page()))
}

#[tokio::test]
async fn construction_performs_no_network_traffic() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;

    let _client = support::client_for(&server);

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn first_call_triggers_exactly_one_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::login_body(3600)))
        .expect(1)
        .mount(&server)
        .await;
    project_list_mock().expect(1).mount(&server).await;

    let client = support::client_for(&server);
    client.projects().list(10, 0, "").await.unwrap();
}

#[tokio::test]
async fn back_to_back_calls_reuse_the_cached_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::login_body(3600)))
        .expect(1)
        .mount(&server)
        .await;
    project_list_mock().expect(3).mount(&server).await;

    let client = support::client_for(&server);
    for _ in 0..3 {
        client.projects().list(10, 0, "").await.unwrap();
    }
}

#[tokio::test]
async fn expired_token_triggers_relogin() {
    let server = MockServer::start().await;
    // One-second TTL is inside the expiry skew, so every call re-logs-in.
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::login_body(1)))
        .expect(2)
        .mount(&server)
        .await;
    project_list_mock().expect(2).mount(&server).await;

    let client = support::client_for(&server);
    client.projects().list(10, 0, "").await.unwrap();
    client.projects().list(10, 0, "").await.unwrap();
}

#[tokio::test]
async fn concurrent_callers_share_a_single_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(support::login_body(3600))
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;
    project_list_mock().expect(2).mount(&server).await;

    let client = support::client_for(&server);
    let projects_a = client.projects();
    let projects_b = client.projects();
    let (first, second) =
        tokio::join!(projects_a.list(10, 0, ""), projects_b.list(10, 0, ""));
    first.unwrap();
    second.unwrap();
}

#[tokio::test]
async fn login_failure_surfaces_as_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid keys"))
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let err = client.projects().list(10, 0, "").await.unwrap_err();

    match err {
        MeridianError::Authentication { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "invalid keys");
        }
        other => panic!("expected authentication error, got {other:?}"),
    }
    // The failed exchange never reached the list endpoint.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() == "/v2/login"));
}

#[tokio::test]
async fn non_login_requests_carry_bearer_and_user_agent_headers() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;
    project_list_mock()
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    client.projects().list(10, 0, "").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let list = requests
        .iter()
        .find(|r| r.url.path() == "/v2/runners/projects/list")
        .expect("list request recorded");

    let auth: Vec<_> = list.headers.get_all("authorization").iter().collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(auth[0], support::TEST_BEARER);

    let agents: Vec<_> = list.headers.get_all("user-agent").iter().collect();
    assert_eq!(agents.len(), 1);
    assert!(agents[0].to_str().unwrap().starts_with("meridian-sdk-rust/"));
}

#[tokio::test]
async fn login_request_shape_matches_the_exchange_contract() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "accessKey": "test-access-key",
            "secretKey": "test-secret-key",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::login_body(3600)))
        .expect(1)
        .mount(&server)
        .await;
    project_list_mock().mount(&server).await;

    let client = support::client_for(&server);
    client.projects().list(10, 0, "").await.unwrap();
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_transport_error() {
    // Bind then drop to get a port that refuses connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = meridian_client::MeridianClient::builder()
        .access_key("AK")
        .secret_key("SK")
        .endpoint(format!("http://{addr}"))
        .build()
        .unwrap();

    let err = client.projects().list(10, 0, "").await.unwrap_err();
    assert!(matches!(err, MeridianError::Transport(_)));
}
