//! OpenAPI document for the service.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::api::dto::{
    auth::{TokenRequest, TokenResponse},
    health::HealthResponse,
    user::{CreateUserRequest, UpdateUserRequest, UserDto},
};
use crate::api::handlers::{auth, health, users};
use crate::error::ProblemBody;

#[derive(OpenApi)]
#[openapi(
    info(title = "UserManagementAPI", version = "v1"),
    paths(
        health::health_handler,
        auth::issue_token_handler,
        users::list_users_handler,
        users::get_user_handler,
        users::create_user_handler,
        users::update_user_handler,
        users::delete_user_handler,
    ),
    components(schemas(
        UserDto,
        CreateUserRequest,
        UpdateUserRequest,
        TokenRequest,
        TokenResponse,
        HealthResponse,
        ProblemBody
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Auth", description = "Development token issuance"),
        (name = "Health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

/// Registers the `Bearer` JWT security scheme referenced by protected paths.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Paste the access token without the 'Bearer ' prefix."))
                    .build(),
            ),
        );
    }
}
