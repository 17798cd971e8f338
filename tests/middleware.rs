mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use user_management::config::Environment;
use user_management::infrastructure::persistence::InMemoryUserRepository;
use user_management::routes::{app_router, normalized};
use user_management::state::AppState;

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = common::create_prod_app();

    let response = app
        .server
        .get("/health")
        .add_header("x-request-id", "req-123")
        .await;

    assert_eq!(response.header("x-request-id"), "req-123");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = common::create_prod_app();

    let response = app.server.get("/health").await;

    let id = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_unauthorized_request_skips_access_log() {
    let app = common::create_prod_app();

    let response = app
        .server
        .get("/api/users")
        .add_header("x-request-id", "req-denied")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(!response.headers().contains_key("x-request-id"));
    assert_eq!(response.header("content-type"), "application/problem+json");
}

#[tokio::test]
async fn test_authorized_request_gets_request_id() {
    let app = common::create_prod_app();

    let response = app
        .server
        .get("/api/users")
        .authorization_bearer(&app.token)
        .add_header("x-request-id", "req-allowed")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), "req-allowed");
}

#[tokio::test]
async fn test_non_integer_id_still_logged() {
    let app = common::create_prod_app();

    let response = app
        .server
        .get("/api/users/abc")
        .authorization_bearer(&app.token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_panic_becomes_opaque_500() {
    let app = common::create_test_app(Environment::Development);

    let response = app.server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.header("content-type"), "application/problem+json");

    let body = response.json::<Value>();
    assert_eq!(body["status"], 500);
    assert_eq!(body["detail"], "Internal server error.");
    assert!(!response.text().contains("Kaboom"));
}

#[tokio::test]
async fn test_dev_routes_hidden_in_production() {
    let app = common::create_prod_app();

    app.server
        .get("/boom")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get("/api-docs/openapi.json")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_served_in_development() {
    let app = common::create_test_app(Environment::Development);

    let response = app.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();

    let doc = response.json::<Value>();
    assert!(doc["paths"]["/api/users"].is_object());
    assert!(doc["paths"].get("/boom").is_none());
    assert!(doc["components"]["securitySchemes"]["Bearer"].is_object());
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(repository, &common::jwt_settings());
    let token = state.auth_service.issue_token("tester").unwrap();
    let app = normalized(app_router(state, Environment::Production));

    let request = Request::builder()
        .uri("/api/users/")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
