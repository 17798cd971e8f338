//! Development-only fault route.

/// Always panics. Mounted only in development to exercise the panic layer.
///
/// # Endpoint
///
/// `GET /boom`
pub async fn boom_handler() -> &'static str {
    panic!("Kaboom!")
}
