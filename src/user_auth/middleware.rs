use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::gateway::{state::AppState, types::ApiError};

/// Reject unauthenticated requests before any handler runs
///
/// Missing or malformed credentials and invalid tokens are both rejected
/// with 403 and a `{"detail": "..."}` body; on success the verified claims
/// are injected as a request extension.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::forbidden("Authentication credentials were not provided."))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::forbidden("Authentication credentials were not provided."))?;

    match state.user_auth.verify_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(ApiError::forbidden("Invalid token.")),
    }
}
