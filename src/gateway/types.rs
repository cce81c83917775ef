//! API response and error types
//!
//! Wire formats are fixed:
//! - success bodies are endpoint-specific DTOs
//! - client errors are `{"error": "..."}` (400) or a field -> messages map
//!   for validation failures
//! - unauthenticated requests get `{"detail": "..."}` with 403

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::transfer::{FieldErrors, TransferError};

/// Client-facing error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid INN(s)")]
    pub error: String,
}

/// Forbidden body for unauthenticated requests
#[derive(Debug, Serialize, ToSchema)]
pub struct ForbiddenResponse {
    #[schema(example = "Authentication credentials were not provided.")]
    pub detail: String,
}

/// Unified handler error; converts into the exact wire bodies above
#[derive(Debug)]
pub enum ApiError {
    /// 400 with a field -> messages map
    Validation(FieldErrors),
    /// 400 with `{"error": msg}`
    BadRequest(String),
    /// 401 with `{"error": msg}`
    Unauthorized(String),
    /// 403 with `{"detail": msg}`
    Forbidden(String),
    /// 500 with a generic body; details stay in the logs
    Internal,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        ApiError::Forbidden(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            ApiError::Unauthorized(error) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorResponse { error })).into_response()
            }
            ApiError::Forbidden(detail) => {
                (StatusCode::FORBIDDEN, Json(ForbiddenResponse { detail })).into_response()
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            tracing::error!("Transfer failed: {}", e);
            ApiError::Internal
        }
    }
}

/// Handler result: a JSON body or an [`ApiError`]
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_error_maps_to_bad_request() {
        let api_err: ApiError = TransferError::InsufficientFunds.into();
        match api_err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "This user has Insufficient funds"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_database_error_maps_to_internal() {
        let api_err: ApiError = TransferError::Database(sqlx::Error::PoolClosed).into();
        assert!(matches!(api_err, ApiError::Internal));
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Invalid user ID".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"error": "Invalid user ID"}));
    }
}
