//! Diagnostic Sink Implementations
//!
//! Provides concrete implementations of DiagnosticSink:
//! - TracingSink: structured warnings through `tracing`
//! - JsonDiagnosticSink: NDJSON output for CI/automation
//! - CollectingSink: in-memory record of a run

mod collecting;
mod json;
mod tracing_sink;

pub use collecting::CollectingSink;
pub use json::{diagnostic_to_json, JsonDiagnosticSink};
pub use tracing_sink::TracingSink;
