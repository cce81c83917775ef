//! Account query handler

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ForbiddenResponse};
use crate::account::AccountRepository;
use crate::user_auth::Claims;

/// Own-account response data
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[schema(example = "1234567890")]
    pub inn: String,
    /// Balance formatted with 2 decimal places
    #[schema(example = "100.00")]
    pub balance: String,
}

/// Get the authenticated caller's account
///
/// GET /api/v1/private/account
#[utoipa::path(
    get,
    path = "/api/v1/private/account",
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 403, description = "Authentication required", body = ForbiddenResponse)
    ),
    security(("jwt_auth" = [])),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<AccountResponse> {
    let account_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| ApiError::forbidden("Invalid token."))?;

    let account = AccountRepository::get_by_id(state.db.pool(), account_id)
        .await
        .map_err(|e| {
            tracing::error!("Account lookup failed: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::forbidden("Invalid token."))?;

    Ok(Json(AccountResponse {
        id: account.id,
        username: account.username,
        email: account.email,
        inn: account.inn,
        balance: format!("{:.2}", account.balance),
    }))
}
