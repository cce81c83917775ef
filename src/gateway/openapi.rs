//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

// Import handler types for schema registration
use crate::gateway::handlers::{AccountResponse, HealthResponse};
use crate::gateway::types::{ErrorResponse, ForbiddenResponse};
use crate::transfer::types::TransferSuccess;
use crate::user_auth::handlers::RegisterResponse;
use crate::user_auth::service::{AuthResponse, LoginRequest, RegisterRequest};

/// JWT bearer authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by POST /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "INN Transfer API",
        version = "1.0.0",
        description = "Transfers a monetary amount from one account to one or more recipients identified by INN, splitting the debit among them."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::transfer::transfer_money,
        crate::gateway::handlers::account::get_account,
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::login,
    ),
    components(schemas(
        TransferSuccess,
        AccountResponse,
        HealthResponse,
        ErrorResponse,
        ForbiddenResponse,
        AuthResponse,
        LoginRequest,
        RegisterRequest,
        RegisterResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Transfer", description = "Money transfer"),
        (name = "Account", description = "Account queries"),
        (name = "Auth", description = "Registration and login"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
