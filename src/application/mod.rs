//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Pipeline` - Decode, flatten, prune, and describe a dist tree
//! - `check_document` - Decode and link a document only

pub mod check;
pub mod pipeline;

pub use check::{check_document, CheckResult};
pub use pipeline::{load_document, Pipeline, PipelineReport};
