//! DTOs for token issuance.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /auth/token`.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({ "username": "alice" }))]
pub struct TokenRequest {
    /// Any non-blank name; becomes the token subject.
    pub username: Option<String>,
}

/// Issued bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
}
