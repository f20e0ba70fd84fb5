//! Domain models for FieldScore AI

mod assessment;
mod chat;

pub use assessment::*;
pub use chat::*;
