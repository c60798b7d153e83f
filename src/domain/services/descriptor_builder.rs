//! Descriptor Builder Service
//!
//! Turns a flattened tree into the nested artifact descriptor tree.
//!
//! Per node, content elements are emitted first (copies and module outputs,
//! in insertion order), then every child whose name is not already covered
//! by a copy. Descriptor names are unique per parent: the first one wins and
//! later ones are reported as `DuplicateChildDescriptor`.

use std::collections::HashSet;

use crate::domain::entities::{ContentElement, DescriptorKind, DescriptorNode, NodeId, Vfs};
use crate::domain::ports::{Diagnostic, DiagnosticSink, FileSystem};

use super::flattener::is_jar;

/// Descriptor Builder Service
pub struct DescriptorBuilder<'a> {
    fs: &'a dyn FileSystem,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> DescriptorBuilder<'a> {
    /// Create a builder with the given collaborators
    pub fn new(fs: &'a dyn FileSystem, sink: &'a dyn DiagnosticSink) -> Self {
        Self { fs, sink }
    }

    /// Build a `DIR` descriptor named after `node` and fill it from `node`
    pub fn build_descriptors(&self, vfs: &Vfs, node: NodeId, in_jar: bool) -> DescriptorNode {
        let mut root = DescriptorNode::new(DescriptorKind::Dir, vfs.node(node).name());
        self.add_files(vfs, &mut root, node, in_jar);
        root
    }

    /// Emit descriptors for `node`'s contents and children under `parent`
    pub fn add_files(&self, vfs: &Vfs, parent: &mut DescriptorNode, node: NodeId, in_jar: bool) {
        let mut covered: HashSet<&str> = HashSet::new();

        for element in vfs.node(node).contents() {
            match element {
                ContentElement::Copy(copy) => {
                    let source = vfs.node(copy.source());
                    let path = source.real_path();
                    let kind = if in_jar && is_jar(source.name()) {
                        DescriptorKind::ExtractedDirectory
                    } else if self.fs.is_dir(path) {
                        DescriptorKind::DirContent
                    } else {
                        DescriptorKind::File
                    };
                    self.add_child(parent, kind, path.to_string_lossy().into_owned());
                    covered.insert(copy.effective_name(vfs));
                }
                ContentElement::ModuleOutput(output) => {
                    self.add_child(
                        parent,
                        DescriptorKind::ModuleOutput,
                        output.project_id().to_string(),
                    );
                }
            }
        }

        for &child in vfs.node(node).children() {
            let name = vfs.node(child).name();
            if covered.contains(name) {
                self.report_duplicate(parent, name);
                continue;
            }

            if is_jar(name) {
                if let Some(archive) = self.add_child(parent, DescriptorKind::Archive, name.to_string())
                {
                    self.add_files(vfs, archive, child, true);
                }
            } else if let Some(dir) = self.add_child(parent, DescriptorKind::Dir, name.to_string()) {
                self.add_files(vfs, dir, child, in_jar);
            }
        }
    }

    fn add_child<'p>(
        &self,
        parent: &'p mut DescriptorNode,
        kind: DescriptorKind,
        name: String,
    ) -> Option<&'p mut DescriptorNode> {
        if parent.child(&name).is_some() {
            self.report_duplicate(parent, &name);
            return None;
        }
        parent.try_add_child(kind, name)
    }

    fn report_duplicate(&self, parent: &DescriptorNode, name: &str) {
        self.sink.record(Diagnostic::DuplicateChildDescriptor {
            parent: parent.name().to_string(),
            name: name.to_string(),
        });
    }
}
