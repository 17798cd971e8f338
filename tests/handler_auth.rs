mod common;

use axum::http::StatusCode;
use serde_json::json;
use user_management::application::services::AuthService;

#[tokio::test]
async fn test_issue_token_success() {
    let app = common::create_prod_app();

    let response = app
        .server
        .post("/auth/token")
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["token_type"], "Bearer");

    let token = body["access_token"].as_str().unwrap();
    let claims = AuthService::new(&common::jwt_settings()).verify(token).unwrap();
    assert_eq!(claims.sub, "alice");
}

#[tokio::test]
async fn test_issued_token_unlocks_users() {
    let app = common::create_prod_app();

    let token = app
        .server
        .post("/auth/token")
        .json(&json!({ "username": "alice" }))
        .await
        .json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.server.get("/api/users").authorization_bearer(token).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_blank_username_rejected() {
    let app = common::create_prod_app();

    let response = app
        .server
        .post("/auth/token")
        .json(&json!({ "username": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["detail"], "Username required.");
}

#[tokio::test]
async fn test_missing_username_rejected() {
    let app = common::create_prod_app();

    let response = app.server.post("/auth/token").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_body_names_body() {
    let app = common::create_prod_app();

    let response = app.server.post("/auth/token").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["errors"]["body"][0], "Request body is required.");
}
