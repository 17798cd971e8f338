//! API route configuration.
//!
//! User endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, issue_token_handler,
    list_users_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// User routes, mounted under `/api/users`.
///
/// # Endpoints
///
/// - `GET    /`      - Paged, searchable list
/// - `POST   /`      - Create a user
/// - `GET    /{id}`  - Fetch one user
/// - `PUT    /{id}`  - Partially update a user
/// - `DELETE /{id}`  - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users_handler).post(create_user_handler))
        .route(
            "/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}

/// Public token route, mounted under `/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token_handler))
}
