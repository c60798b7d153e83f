//! Diagnostics port
//!
//! Non-fatal notices raised while flattening or building descriptors.
//! The core never prints; it records events into an injected sink.

use std::path::PathBuf;

/// Non-fatal event emitted by the domain services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A copy chain led back to a node that is already being expanded.
    ///
    /// `chain` lists the real paths on the expansion path, ending with the
    /// node that was revisited; `target` is the node being populated.
    RecursiveArtifactSkipped { chain: Vec<PathBuf>, target: PathBuf },

    /// A descriptor name was produced twice under one parent; the first one
    /// was kept.
    DuplicateChildDescriptor { parent: String, name: String },
}

impl Diagnostic {
    /// Stable machine-readable name of the event
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::RecursiveArtifactSkipped { .. } => "recursive_artifact_skipped",
            Diagnostic::DuplicateChildDescriptor { .. } => "duplicate_child_descriptor",
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::RecursiveArtifactSkipped { chain, target } => {
                write!(f, "skipped recursive artifact:")?;
                for path in chain {
                    write!(f, "\n - {}", path.display())?;
                }
                write!(f, "\n - {}", target.display())
            }
            Diagnostic::DuplicateChildDescriptor { parent, name } => {
                write!(f, "{}: duplicated child in {}", parent, name)
            }
        }
    }
}

/// Trait for receiving diagnostics
///
/// Implementations can be:
/// - TracingSink: structured `tracing` warnings
/// - JsonDiagnosticSink: NDJSON lines for CI
/// - CollectingSink: in-memory, for tests and summaries
/// - NoopSink: silent operation
pub trait DiagnosticSink: Send + Sync {
    /// Handle a diagnostic
    fn record(&self, diagnostic: Diagnostic);
}

/// No-op sink for silent operation
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _diagnostic: Diagnostic) {}
}
