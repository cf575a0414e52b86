use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_root_reports_running() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "API is running" }));
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/version").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["version"],
        json!(env!("CARGO_PKG_VERSION"))
    );
}
