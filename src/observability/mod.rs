//! Observability
//!
//! Structured JSON logging with a global mute switch.

pub mod logger;

pub use logger::{Logger, Severity};
