pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::interview::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/api/roles", get(handlers::handle_catalog))
        .route("/api/chat", post(handlers::handle_chat))
        .route("/api/review", post(handlers::handle_review))
        .fallback(not_found)
        .with_state(state)
}
