//! Sink Factory
//!
//! Picks the diagnostic sink for an output format. Every sink is wrapped in
//! a `CollectingSink` so callers can inspect what was reported.

use crate::infrastructure::events::{CollectingSink, JsonDiagnosticSink, TracingSink};

use super::output::OutputFormat;

/// Create the diagnostic sink for `format`
///
/// Text output logs diagnostics through `tracing`; JSON output writes one
/// NDJSON event per diagnostic to stdout.
pub fn create_sink(format: OutputFormat) -> CollectingSink {
    match format {
        OutputFormat::Text => CollectingSink::forwarding_to(Box::new(TracingSink)),
        OutputFormat::Json => CollectingSink::forwarding_to(Box::new(JsonDiagnosticSink::stdout())),
    }
}
