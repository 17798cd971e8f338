mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use user_management::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new().route("/health", get(health_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = common::create_prod_app();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
}
