//! Request extractors that reject with [`AppError`] problem documents.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header, and it
/// separates two failure modes:
/// - an empty body or a literal `null` is a validation problem on `body`
/// - anything that does not deserialize into `T` is a malformed body
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::MalformedBody(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::missing_body());
        }

        let value: Option<T> =
            serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedBody(e.to_string()))?;

        value.map(JsonBody).ok_or_else(AppError::missing_body)
    }
}

/// Integer user id from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a user, so it is reported
/// as not found rather than as a bad request.
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::internal(format!("missing id path segment: {e}")))?;

        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| AppError::not_found(format!("User {raw} not found.")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    async fn extract(body: &'static str) -> Result<Payload, AppError> {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        JsonBody::<Payload>::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn test_valid_body() {
        let payload = extract(r#"{"name": "x"}"#).await.unwrap();
        assert_eq!(payload.name, "x");
    }

    #[tokio::test]
    async fn test_empty_body_is_missing() {
        for body in ["", "   \n", "null"] {
            match extract(body).await {
                Err(AppError::Validation(errors)) => assert!(errors.contains_key("body")),
                other => panic!("unexpected result for {body:?}: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_broken_json_is_malformed() {
        assert!(matches!(
            extract(r#"{"name": "#).await,
            Err(AppError::MalformedBody(_))
        ));
    }

    #[tokio::test]
    async fn test_wrong_type_is_malformed() {
        assert!(matches!(
            extract(r#"{"name": 42}"#).await,
            Err(AppError::MalformedBody(_))
        ));
    }
}
