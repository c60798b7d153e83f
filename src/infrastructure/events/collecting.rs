//! Collecting Diagnostic Sink
//!
//! Keeps every diagnostic in memory, optionally forwarding to another sink.

use std::sync::Mutex;

use crate::domain::ports::{Diagnostic, DiagnosticSink};

/// In-memory sink; used by tests and for end-of-run summaries
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
    forward: Option<Box<dyn DiagnosticSink>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect and also pass every diagnostic on to `inner`
    pub fn forwarding_to(inner: Box<dyn DiagnosticSink>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            forward: Some(inner),
        }
    }

    /// Snapshot of the recorded diagnostics, in order
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of recorded diagnostics with the given code
    pub fn count(&self, code: &str) -> usize {
        self.events
            .lock()
            .map(|events| events.iter().filter(|d| d.code() == code).count())
            .unwrap_or(0)
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        if let Some(inner) = &self.forward {
            inner.record(diagnostic.clone());
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic);
        }
    }
}
