//! Handler for token issuance.

use axum::{Json, extract::State};

use crate::api::dto::auth::{TokenRequest, TokenResponse};
use crate::api::extract::JsonBody;
use crate::error::{AppError, ProblemBody};
use crate::state::AppState;

/// Issues a two-hour bearer token for any non-blank username.
///
/// # Endpoint
///
/// `POST /auth/token`
///
/// There is no credential check: this is a development convenience for
/// obtaining tokens the protected routes will accept.
///
/// # Errors
///
/// Returns 400 if the body is missing or the username is blank.
#[utoipa::path(
    post,
    path = "/auth/token",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Missing body or blank username", body = ProblemBody, content_type = "application/problem+json")
    )
)]
pub async fn issue_token_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let username = payload.username.unwrap_or_default();
    let access_token = state.auth_service.issue_token(&username)?;

    tracing::info!(%username, "Issued access token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}
