/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for id-verifier-client tests

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Statement document used across flow tests
#[allow(dead_code)]
pub fn sample_statement() -> serde_json::Value {
    serde_json::json!([
        {"type": "RevealAttribute", "attributeTag": "firstName"},
        {"type": "AttributeInRange", "attributeTag": "dob", "lower": "18000101", "upper": "20080808"}
    ])
}

/// Mount the challenge and statement endpoints for a full-flow test
#[allow(dead_code)]
pub async fn mount_challenge_and_statement(server: &MockServer, account: &str, challenge: &str) {
    Mock::given(method("GET"))
        .and(path("/challenge"))
        .and(query_param("address", account))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "challenge": challenge,
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/statement"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            serde_json::to_string(&sample_statement().to_string()).unwrap(),
            "application/json",
        ))
        .mount(server)
        .await;
}
