//! Request orchestration for the FieldScore pipelines
//!
//! Each service tries the remote service first and substitutes the local
//! deterministic result on any failure. A [`RequestGate`] per pipeline keeps
//! at most one request in flight.

pub mod assessment;
pub mod chat;
pub mod gate;

pub use assessment::RiskAssessmentService;
pub use chat::{ChatService, FailurePolicy};
pub use gate::{GateGuard, Pipeline, RequestGate};

/// Where a pipeline's answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Remote,
    Local,
}

impl ResultSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSource::Remote => "remote",
            ResultSource::Local => "local",
        }
    }
}
