//! JSON Diagnostic Sink
//!
//! Outputs diagnostics as NDJSON for CI/automation consumption.

use crate::domain::ports::{Diagnostic, DiagnosticSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Diagnostic sink that outputs NDJSON events
pub struct JsonDiagnosticSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonDiagnosticSink {
    /// Create a new JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of a diagnostic, shared with the CLI summary output
pub fn diagnostic_to_json(diagnostic: &Diagnostic) -> serde_json::Value {
    match diagnostic {
        Diagnostic::RecursiveArtifactSkipped { chain, target } => serde_json::json!({
            "event": "diagnostic",
            "code": diagnostic.code(),
            "chain": chain.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "target": target.display().to_string(),
        }),
        Diagnostic::DuplicateChildDescriptor { parent, name } => serde_json::json!({
            "event": "diagnostic",
            "code": diagnostic.code(),
            "parent": parent,
            "name": name,
        }),
    }
}

impl DiagnosticSink for JsonDiagnosticSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.write_event(diagnostic_to_json(&diagnostic));
    }
}
