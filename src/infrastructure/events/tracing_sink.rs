//! Tracing Diagnostic Sink
//!
//! Default sink for interactive runs: every diagnostic becomes a structured
//! `tracing` warning.

use crate::domain::ports::{Diagnostic, DiagnosticSink};

/// Sink that forwards diagnostics to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::RecursiveArtifactSkipped { chain, target } => {
                tracing::warn!(
                    code = diagnostic.code(),
                    depth = chain.len(),
                    target = %target.display(),
                    "{}",
                    diagnostic
                );
            }
            Diagnostic::DuplicateChildDescriptor { parent, name } => {
                tracing::warn!(
                    code = diagnostic.code(),
                    parent = %parent,
                    name = %name,
                    "duplicated child descriptor"
                );
            }
        }
    }
}
