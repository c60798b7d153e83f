//! Content elements - declarations of what materializes at a VFS node

use super::vfs::{NodeId, Vfs};

/// A declaration attached to a node describing what lands there.
///
/// The set is closed on purpose: the flattener and the descriptor builder
/// both match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentElement {
    /// Copy of another node's resolved subtree
    Copy(CopyElement),
    /// Compiled output of a project
    ModuleOutput(ModuleOutputElement),
}

impl ContentElement {
    /// Shorthand for a copy element
    pub fn copy(source: NodeId, target_name: Option<String>) -> Self {
        ContentElement::Copy(CopyElement::new(source, target_name))
    }

    /// Shorthand for a module output element
    pub fn module_output(project_id: impl Into<String>) -> Self {
        ContentElement::ModuleOutput(ModuleOutputElement::new(project_id))
    }
}

/// Copies the subtree rooted at `source` into the owning node.
///
/// `source` is a non-owning handle into the arena; it may point anywhere in
/// the document, including at an ancestor of the owning node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CopyElement {
    source: NodeId,
    target_name: Option<String>,
}

impl CopyElement {
    pub fn new(source: NodeId, target_name: Option<String>) -> Self {
        Self {
            source,
            target_name,
        }
    }

    /// Node whose subtree is copied
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Explicit name override, if any
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    /// Name the copy lands under: the override, else the source's own name
    pub fn effective_name<'a>(&'a self, vfs: &'a Vfs) -> &'a str {
        self.target_name
            .as_deref()
            .unwrap_or_else(|| vfs.node(self.source).name())
    }
}

/// Compiled output of a project. Two elements with the same `project_id`
/// are the same element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleOutputElement {
    project_id: String,
}

impl ModuleOutputElement {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}
