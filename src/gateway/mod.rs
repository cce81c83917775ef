//! HTTP gateway
//!
//! Axum router, shared state, and response types. The transfer endpoint and
//! account queries sit behind the JWT middleware; registration, login,
//! health, and API docs are public.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::db::Database;
use crate::user_auth::{self, UserAuthService, jwt_auth_middleware};
use openapi::ApiDoc;
use state::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(user_auth::handlers::register))
        .route("/login", post(user_auth::handlers::login));

    let private_routes = Router::new()
        .route("/account", get(handlers::account::get_account))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    let transfer_routes = Router::new()
        .route("/transfer_money", post(handlers::transfer::transfer_money))
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/private", private_routes)
        .merge(transfer_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(config: &AppConfig, db: Arc<Database>) -> anyhow::Result<()> {
    let user_auth = Arc::new(UserAuthService::new(
        db.pool().clone(),
        config.jwt_secret.clone(),
    ));

    let state = Arc::new(AppState::new(db, user_auth));
    let app = build_router(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
