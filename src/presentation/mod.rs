//! Presentation Layer
//!
//! This layer handles:
//! - Choosing diagnostic sinks for the output format
//! - Output formatting (text/NDJSON)
//!
//! ## Structure
//!
//! - `factory` - Wires diagnostic sinks (dependency injection)
//! - `output` - Output rendering
//!
//! CLI argument parsing lives with the binary.

pub mod factory;
pub mod output;

pub use factory::create_sink;
pub use output::{OutputFormat, TextRenderer};
