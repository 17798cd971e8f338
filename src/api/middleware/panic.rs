//! Translation of handler panics into problem responses.

use axum::{extract::Request, middleware::Next, response::Response};
use std::any::Any;
use tracing::Instrument;

use crate::error::{internal_problem, problem_response};

/// Panic handler for `CatchPanicLayer`.
///
/// Logs the panic payload and answers with the same opaque 500 body used
/// for [`AppError::Internal`](crate::error::AppError::Internal).
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Unhandled panic while serving request");

    problem_response(internal_problem())
}

/// Runs the rest of the stack inside a `request` span with the method and
/// path, so the panic log above can be tied to the request that caused it.
pub async fn request_span(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let span = tracing::info_span!("request", %method, %path);
    next.run(req).instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[test]
    fn test_panic_becomes_opaque_problem() {
        let response = handle_panic(Box::new("secret detail"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
