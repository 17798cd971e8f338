//! Application error type and its HTTP rendering.
//!
//! Every error leaves the service as an RFC 9457 problem document
//! (`application/problem+json`). Internal failures are logged with full
//! detail and rendered without it.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Content type for problem details responses.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Field name → ordered violation messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Problem details body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
#[schema(title = "Problem")]
pub struct ProblemBody {
    #[serde(rename = "type")]
    pub type_url: &'static str,
    pub title: &'static str,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field → messages, present on validation problems only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Body could not be parsed as JSON of the expected shape.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized(reason.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// A validation problem with a single field and message.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::Validation(errors)
    }

    /// Validation problem for an absent request body.
    pub fn missing_body() -> Self {
        Self::field("body", "Request body is required.")
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) | AppError::BadRequest(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_problem(self) -> ProblemBody {
        let status = self.status().as_u16();
        match self {
            AppError::MalformedBody(_) => ProblemBody {
                type_url: "about:blank",
                title: "Bad Request",
                status,
                detail: Some("Malformed JSON or wrong value types.".to_string()),
                errors: None,
            },
            AppError::BadRequest(message) => ProblemBody {
                type_url: "about:blank",
                title: "Bad Request",
                status,
                detail: Some(message),
                errors: None,
            },
            AppError::Validation(errors) => ProblemBody {
                type_url: "about:blank",
                title: "One or more validation errors occurred.",
                status,
                detail: None,
                errors: Some(errors),
            },
            AppError::Unauthorized(_) => ProblemBody {
                type_url: "about:blank",
                title: "Unauthorized",
                status,
                detail: Some("A valid bearer token is required.".to_string()),
                errors: None,
            },
            AppError::NotFound(message) => ProblemBody {
                type_url: "about:blank",
                title: "Not Found",
                status,
                detail: Some(message),
                errors: None,
            },
            AppError::Internal(_) => internal_problem(),
        }
    }
}

/// Opaque body used for every 500, including caught panics.
pub fn internal_problem() -> ProblemBody {
    ProblemBody {
        type_url: "about:blank",
        title: "Internal Server Error",
        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        detail: Some("Internal server error.".to_string()),
        errors: None,
    }
}

/// Renders a problem body with its status and content type.
pub fn problem_response(body: ProblemBody) -> Response {
    let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
    );
    response
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(cause) => tracing::error!(%cause, "request failed"),
            AppError::Unauthorized(reason) => tracing::debug!(%reason, "rejected bearer token"),
            AppError::MalformedBody(cause) => tracing::warn!(%cause, "malformed request body"),
            _ => {}
        }

        let unauthorized = matches!(self, AppError::Unauthorized(_));
        let mut response = problem_response(self.into_problem());

        // RFC 6750
        if unauthorized {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

/// Flattens `validator` output into a field → messages map keyed by
/// PascalCase field names.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(list) = kind {
            let messages = out.entry(pascal_case(field)).or_default();
            for err in list {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid.", pascal_case(field)));
                messages.push(message);
            }
        }
    }
    out
}

/// `first_name` / `firstName` → `FirstName`.
pub fn pascal_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("first_name"), "FirstName");
        assert_eq!(pascal_case("firstName"), "FirstName");
        assert_eq!(pascal_case("email"), "Email");
        assert_eq!(pascal_case("date_of_birth"), "DateOfBirth");
    }

    #[test]
    fn test_not_found_status_and_content_type() {
        let resp = AppError::not_found("User 7 not found.").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let ct = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn test_unauthorized_sets_www_authenticate() {
        let resp = AppError::unauthorized("missing").into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_internal_hides_cause() {
        let problem = AppError::internal("lock poisoned at store.rs:42").into_problem();
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail.as_deref(), Some("Internal server error."));
    }

    #[test]
    fn test_missing_body_names_body_field() {
        match AppError::missing_body() {
            AppError::Validation(errors) => {
                assert_eq!(errors["body"], vec!["Request body is required.".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
