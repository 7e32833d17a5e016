//! Shared fixtures for the CampBX client tests

#![allow(dead_code)]

use campbx::{Endpoint, ExchangeConfig};
use reqwest::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const DEPTH_BODY: &str = r#"{"Asks":[[812.99,1.5],[813.5,0.25]],"Bids":[[811.51,2],[811,"0.123456789012"]]}"#;
pub const TICKER_BODY: &str = r#"{"Last Trade":"812.00","Best Bid":"123.456789012345","Best Ask":"812.99"}"#;
pub const FUNDS_BODY: &str = r#"{"Total USD":"1500.25","Total BTC":"2.00000001","Liquid USD":"1500.25","Liquid BTC":"2.00000001"}"#;

pub const TEST_USERNAME: &str = "test";
pub const TEST_PASSWORD: &str = "fake";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn base_url(server: &MockServer) -> String {
    format!("{}/api/", server.uri())
}

/// Credentials plus a base URL pointing at the mock server
pub fn test_config(server: &MockServer) -> ExchangeConfig {
    ExchangeConfig::new(TEST_USERNAME.to_string(), TEST_PASSWORD.to_string())
        .base_url(base_url(server))
        .timeout_seconds(5)
}

/// Config whose base URL refuses connections
pub fn unreachable_config() -> ExchangeConfig {
    ExchangeConfig::new(TEST_USERNAME.to_string(), TEST_PASSWORD.to_string())
        .base_url("http://127.0.0.1:9/api/".to_string())
        .timeout_seconds(2)
}

/// Answer POSTs to `/api/{endpoint}.php`
pub async fn mount_response(server: &MockServer, endpoint: &str, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/api/{}.php", endpoint)))
        .respond_with(template)
        .mount(server)
        .await;
}

pub async fn mount_json(server: &MockServer, endpoint: &str, body: &str) {
    mount_response(
        server,
        endpoint,
        ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json"),
    )
    .await;
}

/// Mount every endpoint answering with its own path, `{"endpoint":"<path>"}`
pub async fn mount_every_endpoint(server: &MockServer) {
    for endpoint in Endpoint::ALL {
        let body = format!(r#"{{"endpoint":"{}"}}"#, endpoint.path());
        mount_json(server, endpoint.path(), &body).await;
    }
}

/// Endpoint a recorded request was sent to
pub fn endpoint_of(request: &Request) -> Option<Endpoint> {
    Endpoint::ALL
        .into_iter()
        .find(|endpoint| request.url.path() == format!("/api/{}.php", endpoint.path()))
}

/// Assert `user`/`pass` are sent exactly to the endpoints that require them
pub fn assert_credential_policy(requests: &[Request]) {
    for request in requests {
        let endpoint = endpoint_of(request).expect("request to an unknown path");
        let user = form_value(request, "user");
        let pass = form_value(request, "pass");
        if endpoint.requires_auth() {
            assert_eq!(user.as_deref(), Some(TEST_USERNAME), "{}", endpoint);
            assert_eq!(pass.as_deref(), Some(TEST_PASSWORD), "{}", endpoint);
        } else {
            assert!(user.is_none() && pass.is_none(), "{}", endpoint);
        }
    }
}

/// Decoded form fields of a recorded request
pub fn form_fields(request: &Request) -> Vec<(String, String)> {
    let body = String::from_utf8_lossy(&request.body);
    Url::parse(&format!("http://localhost/?{}", body))
        .map(|url| url.query_pairs().into_owned().collect())
        .unwrap_or_default()
}

pub fn form_value(request: &Request, key: &str) -> Option<String> {
    form_fields(request)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Runtime for driving the mock server from synchronous tests
pub fn mock_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build mock server runtime")
}
