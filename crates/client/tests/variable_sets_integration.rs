//! Variable-sets facade: simulated Get through the id filter and the
//! serialize/echo/deserialize round-trip.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use meridian_domain::{Variable, VariableSet};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn sample_set() -> serde_json::Value {
    serde_json::json!({
        "id": "vs1",
        "name": "creds",
        "scope": "project",
        "variables": [
            {"key": "REGION", "value": "eu-west-1", "sensitive": false},
            {"key": "TOKEN", "value": "shh", "sensitive": true},
        ],
    })
}

#[tokio::test]
async fn get_selects_the_single_filtered_element() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/v2/variable-sets"))
        .and(query_param("id", "vs1"))
        .and(query_param("pageSize", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [sample_set()],
            "totalCount": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let set = client.variable_sets().get("vs1").await.unwrap();

    assert_eq!(set.id, "vs1");
    assert_eq!(set.variables.len(), 2);
}

#[tokio::test]
async fn get_miss_surfaces_not_found_with_the_id() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/v2/variable-sets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "totalCount": 0,
        })))
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let err = client.variable_sets().get("vs-missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("vs-missing"));
}

#[tokio::test]
async fn get_ignores_entries_with_a_different_id() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;
    // A sloppy backend ignoring the filter must not produce a false hit.
    Mock::given(method("GET"))
        .and(path("/v2/variable-sets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [sample_set()],
            "totalCount": 1,
        })))
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let err = client.variable_sets().get("other").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_round_trips_through_a_verbatim_echo() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;
    Mock::given(method("PUT"))
        .and(path("/v2/variable-sets/vs1"))
        .respond_with(|request: &Request| {
            ResponseTemplate::new(200).set_body_raw(request.body.clone(), "application/json")
        })
        .expect(1)
        .mount(&server)
        .await;

    let sent = VariableSet {
        id: "vs1".into(),
        name: "creds".into(),
        scope: "project".into(),
        variables: vec![
            Variable { key: "REGION".into(), value: "eu-west-1".into(), sensitive: false },
            Variable { key: "TOKEN".into(), value: "shh".into(), sensitive: true },
        ],
    };

    let client = support::client_for(&server);
    let received = client.variable_sets().update(&sent).await.unwrap();

    assert_eq!(received, sent);
}

#[tokio::test]
async fn delete_accepts_200_and_204() {
    let server = MockServer::start().await;
    support::mount_login(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/v2/variable-sets/vs1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    client.variable_sets().delete("vs1").await.unwrap();
}
