//! Handlers for user management endpoints.
//!
//! All routes here sit behind the bearer middleware, so every handler can
//! read the caller's [`Claims`] from request extensions.

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::pagination::{ListUsersQuery, PagedResult};
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::api::extract::{JsonBody, UserId};
use crate::application::services::Claims;
use crate::error::{AppError, ProblemBody};
use crate::state::AppState;

/// Lists users, optionally filtered by `search`, one page at a time.
///
/// # Endpoint
///
/// `GET /api/users?search=&page=&pageSize=`
///
/// Results are ordered by id. `totalCount` is the number of matches before
/// paging. Out-of-range `page`/`pageSize` values are clamped, not rejected.
///
/// # Errors
///
/// Returns 400 if `page` or `pageSize` is not an integer.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(ListUsersQuery),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "One page of users", body = PagedResult<UserDto>),
        (status = 400, description = "Unparseable paging parameters", body = ProblemBody, content_type = "application/problem+json"),
        (status = 401, description = "Missing or invalid bearer token", body = ProblemBody, content_type = "application/problem+json")
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<PagedResult<UserDto>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;

    let page = query.page();
    let page_size = query.page_size();

    let result = state
        .user_service
        .list_users(query.search.as_deref(), page, page_size)
        .await?;

    Ok(Json(PagedResult {
        items: result.items.into_iter().map(UserDto::from).collect(),
        total_count: result.total,
        page,
        page_size,
    }))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    security(("Bearer" = [])),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ProblemBody, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemBody, content_type = "application/problem+json")
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<UserDto>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// Names and email are stored trimmed and the user starts active. The
/// response carries `Location: /api/users/{id}`.
///
/// # Errors
///
/// Returns 400 if the body is missing, malformed, or fails validation.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    security(("Bearer" = [])),
    responses(
        (status = 201, description = "User created", body = UserDto,
            headers(("Location" = String, description = "URL of the new user"))),
        (status = 400, description = "Validation failed", body = ProblemBody, content_type = "application/problem+json"),
        (status = 401, description = "Missing or invalid bearer token", body = ProblemBody, content_type = "application/problem+json")
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.into_input()).await?;

    tracing::info!(user_id = user.id, actor = %claims.sub, "User created");

    let location = format!("/api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(user)),
    ))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// Only fields present in the body change; `null` counts as absent.
/// Existence is checked before the body is validated.
///
/// # Errors
///
/// Returns 400 if the body is missing, malformed, or fails validation.
/// Returns 404 if the user does not exist.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    security(("Bearer" = [])),
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Validation failed", body = ProblemBody, content_type = "application/problem+json"),
        (status = 401, description = "Missing or invalid bearer token", body = ProblemBody, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemBody, content_type = "application/problem+json")
    )
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
    Extension(claims): Extension<Claims>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<StatusCode, AppError> {
    state
        .user_service
        .update_user(id, move || {
            payload.validate()?;
            Ok(payload.into())
        })
        .await?;

    tracing::info!(user_id = id, actor = %claims.sub, "User updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Permanently deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    security(("Bearer" = [])),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ProblemBody, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemBody, content_type = "application/problem+json")
    )
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;

    tracing::info!(user_id = id, actor = %claims.sub, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
