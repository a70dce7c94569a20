use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_version_reports_package() {
    let server = TestContext::new().server();

    let response = server.get("/version").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "barberbook-api");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn test_search_options() {
    let server = TestContext::new().server();

    let response = server.get("/api/search-options").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let options = body.as_array().unwrap();
    assert_eq!(options.len(), 6);
    assert_eq!(options[0]["title"], "Cabelo");
    assert_eq!(options[0]["image_url"], "/cabelo.svg");
}

#[tokio::test]
async fn test_home_rejects_malformed_identity() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/home")
        .add_header(
            axum::http::HeaderName::from_static("x-user-id"),
            axum::http::HeaderValue::from_static("nope"),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
