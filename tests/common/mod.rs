#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Duration;
use serde_json::{Value, json};
use std::sync::Arc;
use user_management::application::services::AuthService;
use user_management::config::{Environment, JwtSettings};
use user_management::domain::entities::NewUser;
use user_management::domain::repositories::UserRepository;
use user_management::infrastructure::persistence::InMemoryUserRepository;
use user_management::routes::app_router;
use user_management::state::AppState;

pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryUserRepository>,
    pub token: String,
}

pub fn jwt_settings() -> JwtSettings {
    JwtSettings::default()
}

/// Full router over an empty store, plus a valid token.
pub fn create_test_app(environment: Environment) -> TestApp {
    let repository = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(repository.clone(), &jwt_settings());
    let token = state.auth_service.issue_token("tester").unwrap();

    let server = TestServer::new(app_router(state, environment)).unwrap();

    TestApp {
        server,
        repository,
        token,
    }
}

pub fn create_prod_app() -> TestApp {
    create_test_app(Environment::Production)
}

pub fn expired_token() -> String {
    AuthService::new(&jwt_settings())
        .issue_token_with_ttl("tester", Duration::seconds(-5))
        .unwrap()
}

pub fn foreign_token() -> String {
    AuthService::new(&JwtSettings {
        key: "a-completely-different-signing-key-0123456789".to_string(),
        ..jwt_settings()
    })
    .issue_token("mallory")
    .unwrap()
}

pub async fn insert_user(repo: &InMemoryUserRepository, first: &str, last: &str, email: &str) -> i64 {
    repo.insert(NewUser {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        date_of_birth: None,
        is_active: true,
    })
    .await
    .unwrap()
    .id
}

pub fn create_body() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@example.com",
        "dateOfBirth": "1990-01-01"
    })
}
