//! Chat assistant models

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// A user question for the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    pub message: String,
    #[serde(default)]
    pub language: Language,
}

impl ChatQuery {
    pub fn new(message: impl Into<String>, language: Language) -> Self {
        Self {
            message: message.into(),
            language,
        }
    }
}

/// The assistant's answer to a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub text: String,
}

impl ChatAnswer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Wire shape of a chat answer (`{"response": "..."}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

impl From<ChatAnswer> for ChatReply {
    fn from(answer: ChatAnswer) -> Self {
        Self {
            response: answer.text,
        }
    }
}

impl From<ChatReply> for ChatAnswer {
    fn from(reply: ChatReply) -> Self {
        Self {
            text: reply.response,
        }
    }
}
