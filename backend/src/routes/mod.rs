//! Route definitions for the FieldScore gateway

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::pipeline_status))
        .route("/assess", post(handlers::assess_farm))
        .route("/chat", post(handlers::send_chat_message))
}
