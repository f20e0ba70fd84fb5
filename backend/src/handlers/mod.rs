//! HTTP handlers for the FieldScore gateway

pub mod assessment;
pub mod chat;
pub mod health;

pub use assessment::assess_farm;
pub use chat::send_chat_message;
pub use health::{health_check, pipeline_status, root};

/// Response header naming the path that produced a pipeline answer
pub const SOURCE_HEADER: &str = "x-fieldscore-source";
