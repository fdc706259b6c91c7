//! Structured logging: tracing subscriber setup and the per-request audit line.

mod format;

pub use format::{PredictionLog, StructuredLogger};
