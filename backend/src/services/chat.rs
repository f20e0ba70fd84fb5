//! Chat service
//!
//! Forwards questions to the remote assistant. When the assistant cannot be
//! reached the configured [`FailurePolicy`] decides the answer: the rule-based
//! responder (default) or a plain connection-trouble notice.

use serde::Deserialize;
use std::sync::Arc;

use shared::{connection_trouble_message, respond, ChatAnswer, ChatQuery};

use crate::error::AppResult;
use crate::external::ChatBackend;
use crate::services::gate::{Pipeline, RequestGate};
use crate::services::ResultSource;

/// Answer strategy when the remote assistant fails
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Answer from the keyword rule table
    #[default]
    Fallback,
    /// Tell the user the assistant is unreachable
    Notice,
}

/// Chat pipeline
#[derive(Clone)]
pub struct ChatService {
    backend: Arc<dyn ChatBackend>,
    gate: RequestGate,
    failure_policy: FailurePolicy,
}

impl ChatService {
    /// Create a new ChatService with the default failure policy
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_failure_policy(backend, FailurePolicy::default())
    }

    pub fn with_failure_policy(
        backend: Arc<dyn ChatBackend>,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            backend,
            gate: RequestGate::new(Pipeline::Chat),
            failure_policy,
        }
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Answer a question, remotely if possible
    pub async fn chat(&self, query: &ChatQuery) -> AppResult<ChatAnswer> {
        self.chat_with_source(query).await.map(|(answer, _)| answer)
    }

    /// Answer a question and report which path produced the answer
    pub async fn chat_with_source(
        &self,
        query: &ChatQuery,
    ) -> AppResult<(ChatAnswer, ResultSource)> {
        let _guard = self.gate.try_enter()?;

        tracing::debug!(language = %query.language, "Sending message to chat API");

        match self.backend.ask(query).await {
            Ok(answer) => Ok((answer, ResultSource::Remote)),
            Err(e) => {
                tracing::warn!(
                    pipeline = %Pipeline::Chat,
                    error = %e,
                    policy = ?self.failure_policy,
                    "Chat API not available, answering locally"
                );
                let text = match self.failure_policy {
                    FailurePolicy::Fallback => respond(&query.message, query.language),
                    FailurePolicy::Notice => connection_trouble_message(query.language),
                };
                Ok((ChatAnswer::new(text), ResultSource::Local))
            }
        }
    }
}
