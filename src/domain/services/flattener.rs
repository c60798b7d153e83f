//! Flattener Service
//!
//! Resolves every copy chain reachable from a root into a new, concrete
//! tree appended to the same arena. The input tree is only read.
//!
//! ## Rules
//!
//! - Copies whose source exists on disk are kept as resolved copies
//!   (renamed to their effective name); the source's subtree is expanded in
//!   place either way.
//! - Copying a `*.jar` outside of a jar opens an extraction boundary: the
//!   source is expanded into a child named after the jar. Inside a jar,
//!   nested jars are expanded flat into the current jar.
//! - A node already on the current expansion path is skipped and reported
//!   as `RecursiveArtifactSkipped`. Detection is path-scoped, so the same
//!   node may be expanded many times from independent branches.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::entities::{ContentElement, CopyElement, NodeId, Vfs};
use crate::domain::ports::{Diagnostic, DiagnosticSink, FileSystem};

const JAR_SUFFIX: &str = ".jar";

/// Returns true for names that open a jar extraction boundary
pub fn is_jar(name: &str) -> bool {
    name.ends_with(JAR_SUFFIX)
}

/// Flattener Service
///
/// Holds only its collaborators; all traversal state lives in a per-call
/// pass, so one flattener can be reused across graphs.
pub struct Flattener<'a> {
    fs: &'a dyn FileSystem,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Flattener<'a> {
    /// Create a flattener with the given collaborators
    pub fn new(fs: &'a dyn FileSystem, sink: &'a dyn DiagnosticSink) -> Self {
        Self { fs, sink }
    }

    /// Flatten the tree under `root` and return the new root.
    ///
    /// The new root carries the same name and real path as `root` and shares
    /// no nodes with it. Copy elements in the result still point at the
    /// original source nodes.
    pub fn flatten(&self, vfs: &mut Vfs, root: NodeId) -> NodeId {
        let (name, real_path) = {
            let node = vfs.node(root);
            (node.name().to_string(), node.real_path().to_path_buf())
        };
        let new_root = vfs.add_root(name, real_path);

        let mut pass = FlattenPass {
            fs: self.fs,
            sink: self.sink,
            visiting: HashSet::new(),
            stack: Vec::new(),
        };
        pass.copy_flattened(vfs, root, new_root, false);

        tracing::debug!(
            root = %vfs.node(root).real_path().display(),
            nodes = vfs.node_count(new_root),
            "flattened tree"
        );
        new_root
    }
}

/// Traversal state of one `flatten` call
struct FlattenPass<'a> {
    fs: &'a dyn FileSystem,
    sink: &'a dyn DiagnosticSink,
    visiting: HashSet<NodeId>,
    stack: Vec<NodeId>,
}

impl FlattenPass<'_> {
    fn copy_flattened(&mut self, vfs: &mut Vfs, source: NodeId, target: NodeId, in_jar: bool) {
        if !self.visiting.insert(source) {
            self.report_cycle(vfs, source, target);
            return;
        }
        self.stack.push(source);

        let contents = vfs.node(source).contents().to_vec();
        for element in contents {
            match element {
                ContentElement::Copy(copy) => self.expand_copy(vfs, &copy, target, in_jar),
                ContentElement::ModuleOutput(output) => {
                    vfs.add_content(target, ContentElement::ModuleOutput(output));
                }
            }
        }

        let children = vfs.node(source).children().to_vec();
        for child in children {
            let name = vfs.node(child).name().to_string();
            let new_child = vfs.get_or_create_child(target, &name);
            self.copy_flattened(vfs, child, new_child, in_jar);
        }

        self.stack.pop();
        self.visiting.remove(&source);
    }

    fn expand_copy(&mut self, vfs: &mut Vfs, copy: &CopyElement, target: NodeId, in_jar: bool) {
        let source = copy.source();
        let name = copy.effective_name(vfs).to_string();

        if self.fs.exists(vfs.node(source).real_path()) {
            vfs.add_content(target, ContentElement::copy(source, Some(name.clone())));
        } else {
            tracing::debug!(
                source = %vfs.node(source).real_path().display(),
                "copy source does not exist, dropping it"
            );
        }

        if !in_jar && is_jar(&name) {
            let jar = vfs.get_or_create_child(target, &name);
            self.copy_flattened(vfs, source, jar, true);
        } else {
            self.copy_flattened(vfs, source, target, in_jar);
        }
    }

    fn report_cycle(&self, vfs: &Vfs, source: NodeId, target: NodeId) {
        let mut chain: Vec<PathBuf> = self
            .stack
            .iter()
            .map(|id| vfs.node(*id).real_path().to_path_buf())
            .collect();
        chain.push(vfs.node(source).real_path().to_path_buf());

        self.sink.record(Diagnostic::RecursiveArtifactSkipped {
            chain,
            target: vfs.node(target).real_path().to_path_buf(),
        });
    }
}
