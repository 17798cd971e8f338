//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`               - Liveness check (public)
//! - `POST /auth/token`           - Bearer token issuance (public)
//! - `/api/users/*`               - User CRUD (Bearer token required)
//! - `/swagger-ui`, `/api-docs/*` - API docs (development only)
//! - `GET  /boom`                 - Always panics (development only)
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash handling (applied by the server)
//! - **Request span** - Method and path context for everything below
//! - **Panic translation** - Handler panics become an opaque 500 problem
//! - **Authentication** - Bearer JWT on `/api/users/*` only
//! - **Access log** - One line per request with a request id
//!
//! Requests rejected by authentication never reach the access log.

use crate::api;
use crate::api::handlers::{boom_handler, health_handler};
use crate::api::middleware::{access_log, auth, panic};
use crate::api::openapi::ApiDoc;
use crate::config::Environment;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `environment` - development mounts the Swagger UI and the `/boom` route
pub fn app_router(state: AppState, environment: Environment) -> Router {
    // Layers added later wrap earlier ones, so auth sits outside the access log.
    let users_router = api::routes::user_routes()
        .layer(middleware::from_fn(access_log::layer))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let mut public_router = Router::new()
        .route("/health", get(health_handler))
        .nest("/auth", api::routes::auth_routes());

    if environment.is_development() {
        public_router = public_router
            .route("/boom", get(boom_handler))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    public_router
        .layer(middleware::from_fn(access_log::layer))
        .nest("/api/users", users_router)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(middleware::from_fn(panic::request_span))
}

/// Wraps the router so `/api/users/` and `/api/users` route identically.
///
/// Path normalization has to run before routing, so it wraps the finished
/// router rather than being added as a router layer.
pub fn normalized(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
