//! Check Use Case
//!
//! Decodes and links a VFS document without flattening it. Any structural
//! problem (malformed JSON, dangling reference, unknown content type) is
//! returned as an error.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::ContentElement;
use crate::error::DistResult;

use super::pipeline::load_document;

/// Result of checking a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Nodes owned by the document root
    pub nodes: usize,
    /// Copy elements across all nodes
    pub copies: usize,
    /// Module output elements across all nodes
    pub module_outputs: usize,
}

/// Decode and link the document at `path`
pub fn check_document(path: &Path) -> DistResult<CheckResult> {
    let (vfs, root) = load_document(path)?;
    let mut result = CheckResult {
        nodes: vfs.node_count(root),
        ..CheckResult::default()
    };

    let mut pending = vec![root];
    while let Some(id) = pending.pop() {
        let node = vfs.node(id);
        for element in node.contents() {
            match element {
                ContentElement::Copy(_) => result.copies += 1,
                ContentElement::ModuleOutput(_) => result.module_outputs += 1,
            }
        }
        pending.extend_from_slice(node.children());
    }

    Ok(result)
}
