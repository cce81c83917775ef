use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::gateway::{state::AppState, types::ApiError};

/// Registration response data
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user_id: i64,
}

/// Register a new account
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account registered", body = RegisterResponse),
        (status = 400, description = "Invalid input or account already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    // Basic input check; INN format is validated by the service
    if req.email.is_empty() || req.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Invalid email or password (min 8 chars)",
        ));
    }

    match state.user_auth.register(req).await {
        Ok(user_id) => Ok((StatusCode::CREATED, Json(RegisterResponse { user_id }))),
        Err(e) => {
            let err_msg = e.to_string();
            if err_msg.contains("duplicate key") {
                tracing::warn!("Registration attempt for existing account: {}", err_msg);
                Err(ApiError::bad_request(
                    "Username, email or INN already exists",
                ))
            } else if err_msg.starts_with("Invalid") {
                // INN validation failure; message names the violated rule
                Err(ApiError::bad_request(err_msg))
            } else {
                tracing::error!("Registration failed: {:?}", e);
                Err(ApiError::Internal)
            }
        }
    }
}

/// Login and receive a JWT
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    match state.user_auth.login(req).await {
        Ok(resp) => Ok(Json(resp)),
        Err(e) => {
            tracing::warn!("Login failed: {:?}", e);
            Err(ApiError::unauthorized("Invalid email or password"))
        }
    }
}
