//! Domain Services
//!
//! - `Flattener` - resolves copy chains into a concrete tree
//! - `DescriptorBuilder` - derives the artifact descriptor tree
//! - `apply_prune_rules` - trims a flattened tree before description
//! - `render_tree` - plain-text report of a tree

pub mod descriptor_builder;
pub mod flattener;
pub mod pruner;
pub mod tree_report;

pub use descriptor_builder::DescriptorBuilder;
pub use flattener::{is_jar, Flattener};
pub use pruner::apply_prune_rules;
pub use tree_report::{describe_content, render_tree};
