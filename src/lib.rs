//! distmodel - flattens distribution overlay models into IDE artifact descriptors
//!
//! A build describes its distribution layout as a virtual file system overlay:
//! nodes mirror real paths and carry content elements that copy other nodes
//! or drop a project's compiled output in place. distmodel decodes that
//! overlay from JSON, flattens every copy chain into a concrete tree (with
//! jar extraction boundaries and cycle detection), and derives the nested
//! artifact descriptors an IDE uses to assemble the same layout.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{check_document, load_document, Pipeline, PipelineReport};
pub use config::Config;
pub use domain::entities::{
    ContentElement, CopyElement, DescriptorKind, DescriptorNode, ModuleOutputElement, NodeId,
    VNode, Vfs,
};
pub use domain::ports::{Diagnostic, DiagnosticSink, FileSystem, NoopSink};
pub use domain::services::{render_tree, DescriptorBuilder, Flattener};
pub use error::{DistError, DistResult};
