//! Remote assistant client
//!
//! Client for the conversational `/api/chat` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use shared::{ChatAnswer, ChatQuery, ChatReply};

use crate::error::UpstreamError;

/// Something that can answer a chat query remotely
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, query: &ChatQuery) -> Result<ChatAnswer, UpstreamError>;
}

/// Client for the remote assistant service
#[derive(Clone)]
pub struct ChatClient {
    endpoint: String,
    http_client: Client,
}

impl ChatClient {
    /// Create a new chat client against `base_url`
    pub fn new(http_client: Client, base_url: &str) -> Self {
        Self {
            endpoint: super::endpoint(base_url, "/api/chat"),
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn ask(&self, query: &ChatQuery) -> Result<ChatAnswer, UpstreamError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Cache-Control", "no-cache")
            .json(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        tracing::debug!("Chat API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedBody(e.to_string()))?;

        Ok(reply.into())
    }
}
