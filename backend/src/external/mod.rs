//! Remote prediction and assistant service integrations
//!
//! The services depend on the [`PredictionBackend`] and [`ChatBackend`]
//! traits; the reqwest clients here are the production implementations.

pub mod chat;
pub mod prediction;

pub use chat::{ChatBackend, ChatClient};
pub use prediction::{PredictionBackend, PredictionClient};

use reqwest::Client;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Build the HTTP client shared by both upstream clients
pub fn build_http_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))
}

/// Join a base URL and an absolute path without doubling the slash
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
