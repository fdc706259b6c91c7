//! convpredict — interactive e-commerce purchase conversion predictor.
//!
//! Modular structure:
//! - [`session`] — Console form collecting raw session metrics
//! - [`features`] — Feature derivation pipeline (sums, ratios, month encoding)
//! - [`model`] — Pre-trained conversion classifier boundary (ONNX artifact)
//! - [`verdict`] — Human-readable prediction presentation
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod session;
pub mod features;
pub mod model;
pub mod verdict;
pub mod logging;

pub use config::AppConfig;
pub use session::{SessionForm, SessionRecord, VisitorType};
pub use features::{derive, FeatureRecord};
pub use model::{Classifier, ClassifierError, OnnxClassifier};
pub use verdict::{Outcome, Verdict};
pub use logging::StructuredLogger;
