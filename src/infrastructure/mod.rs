//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Diagnostic sinks (tracing, JSON lines, collecting)
//! - `codec/` - VFS and descriptor JSON formats

pub mod codec;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use codec::{decode, decode_str, encode, encode_pretty, encode_to_string, write_descriptors};
pub use events::{CollectingSink, JsonDiagnosticSink, TracingSink};
pub use fs::{atomic_write, LocalFs, MemoryFs};
