//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod diagnostics;
pub mod file_system;

pub use diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
pub use file_system::FileSystem;
