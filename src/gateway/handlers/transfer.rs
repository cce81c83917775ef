//! Money transfer handler

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde_json::Value;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ErrorResponse, ForbiddenResponse};
use crate::account::AccountRepository;
use crate::transfer::TransferService;
use crate::transfer::types::TransferSuccess;
use crate::transfer::validate::parse_transfer_request;
use crate::user_auth::Claims;

/// Transfer money endpoint
///
/// POST /transfer_money
///
/// Debits `from_user_id` by `debit_amount` and splits it across the
/// accounts named in `to_users_inn`. The body is validated field by field
/// before any account is touched; domain failures (self-transfer,
/// insufficient funds, unresolved recipients, unknown source) come back as
/// 400 with a stable `{"error": "..."}` body.
#[utoipa::path(
    post,
    path = "/transfer_money",
    request_body(
        content = String,
        description = "Transfer request: from_user_id, to_users_inn, debit_amount",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Transfer completed", body = TransferSuccess),
        (status = 400, description = "Validation failure or rejected transfer", body = ErrorResponse),
        (status = 403, description = "Authentication required", body = ForbiddenResponse)
    ),
    security(("jwt_auth" = [])),
    tag = "Transfer"
)]
pub async fn transfer_money(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<Value>,
) -> ApiResult<TransferSuccess> {
    // 1. Shape-check the raw body; field errors short-circuit as 400
    let req = parse_transfer_request(&body).map_err(ApiError::Validation)?;

    // 2. Resolve the authenticated requester; the self-transfer guard needs
    //    their INN. A token naming a vanished account is treated as invalid.
    let requester_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| ApiError::forbidden("Invalid token."))?;

    let requester = AccountRepository::get_by_id(state.db.pool(), requester_id)
        .await
        .map_err(|e| {
            tracing::error!("Requester lookup failed: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| ApiError::forbidden("Invalid token."))?;

    tracing::info!(
        requester_id,
        from_user_id = req.from_user_id,
        recipients = req.to_users_inn.len(),
        amount = %req.debit_amount,
        "transfer requested"
    );

    // 3. Execute; all balance mutation happens inside one DB transaction
    TransferService::execute(&state.db, &requester.inn, &req).await?;

    Ok(Json(TransferSuccess::new()))
}
