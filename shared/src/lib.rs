//! Shared types and pure decision logic for FieldScore AI
//!
//! This crate contains the farm risk models, the local risk scorer and the
//! rule-based chat responder. It performs no I/O, so it is used both by the
//! backend gateway (as the fallback path) and by the browser via WASM.

pub mod models;
pub mod responder;
pub mod scoring;
pub mod types;
pub mod validation;

pub use models::*;
pub use responder::*;
pub use scoring::*;
pub use types::*;
pub use validation::*;
