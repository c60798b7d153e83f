//! Artifact descriptor tree
//!
//! The nested packaging layout consumed by IDE artifact configuration.

use serde::Serialize;

/// Kind of a descriptor node.
///
/// The full set mirrors the IDE's artifact element types; the builder only
/// produces `Dir`, `Archive`, `ModuleOutput`, `File`, `DirContent` and
/// `ExtractedDirectory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DescriptorKind {
    Artifact,
    Dir,
    Archive,
    LibraryFiles,
    ModuleOutput,
    ModuleTestOutput,
    ModuleSrc,
    File,
    DirContent,
    ExtractedDirectory,
    ArtifactRef,
}

impl DescriptorKind {
    /// Wire name of the kind, e.g. `DIR_CONTENT`
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptorKind::Artifact => "ARTIFACT",
            DescriptorKind::Dir => "DIR",
            DescriptorKind::Archive => "ARCHIVE",
            DescriptorKind::LibraryFiles => "LIBRARY_FILES",
            DescriptorKind::ModuleOutput => "MODULE_OUTPUT",
            DescriptorKind::ModuleTestOutput => "MODULE_TEST_OUTPUT",
            DescriptorKind::ModuleSrc => "MODULE_SRC",
            DescriptorKind::File => "FILE",
            DescriptorKind::DirContent => "DIR_CONTENT",
            DescriptorKind::ExtractedDirectory => "EXTRACTED_DIRECTORY",
            DescriptorKind::ArtifactRef => "ARTIFACT_REF",
        }
    }
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the descriptor tree. Child names are unique per parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorNode {
    #[serde(rename = "type")]
    kind: DescriptorKind,
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<DescriptorNode>,
}

impl DescriptorNode {
    pub fn new(kind: DescriptorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[DescriptorNode] {
        &self.children
    }

    /// Child by name
    pub fn child(&self, name: &str) -> Option<&DescriptorNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Append a child unless one with the same name exists.
    ///
    /// Returns the new child, or `None` when the name was taken; the first
    /// child keeps its place.
    pub fn try_add_child(
        &mut self,
        kind: DescriptorKind,
        name: impl Into<String>,
    ) -> Option<&mut DescriptorNode> {
        let name = name.into();
        if self.child(&name).is_some() {
            return None;
        }
        self.children.push(DescriptorNode::new(kind, name));
        self.children.last_mut()
    }

    /// Total number of descriptors in this subtree, root included
    pub fn descriptor_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DescriptorNode::descriptor_count)
            .sum::<usize>()
    }
}
