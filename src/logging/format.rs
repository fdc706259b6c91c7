//! JSON log lines: one JSON object per line (ndjson) for ingestion and audit.
//! Logs go to stderr; stdout belongs to the form and the verdict.

use crate::verdict::Verdict;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// One prediction, flattened for the audit stream. Carries the verdict only,
/// never the submitted session fields.
#[derive(Debug, Serialize)]
pub struct PredictionLog {
    pub ts: String,
    pub request_id: String,
    pub outcome: &'static str,
    pub probability: f32,
}

impl PredictionLog {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            ts: verdict.ts.to_rfc3339(),
            request_id: verdict.request_id.clone(),
            outcome: verdict.outcome.as_str(),
            probability: verdict.probability,
        }
    }
}

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber: JSON lines or plain text to stderr, level
    /// from RUST_LOG or the configured default.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(fmt).init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    /// Emit a single structured line (e.g. a prediction) without going
    /// through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) {
        if let Ok(line) = serde_json::to_string(event) {
            let _ = writeln!(w, "{}", line);
        }
    }
}
