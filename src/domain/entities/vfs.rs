//! Overlay filesystem arena
//!
//! Nodes live in a flat `Vec` and refer to each other through [`NodeId`].
//! Ownership is a strict tree (a parent owns the ids in its `children`);
//! copy relationships are plain ids stored in content elements and never
//! count as ownership, so reference cycles cannot tangle the tree itself.
//!
//! Several trees may share one arena: a flattened tree is appended next to
//! the tree it was derived from, which keeps its copy sources resolvable.

use std::path::{Component, Path, PathBuf};

use super::content::ContentElement;
use crate::error::{DistError, DistResult};

/// Handle to a node inside a [`Vfs`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// One path segment of the overlay tree
#[derive(Debug, Clone)]
pub struct VNode {
    name: String,
    real_path: PathBuf,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    contents: Vec<ContentElement>,
}

impl VNode {
    /// Path segment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Real filesystem path this node stands for
    pub fn real_path(&self) -> &Path {
        &self.real_path
    }

    /// Back-reference used to derive `real_path`; never walked for ownership
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Content elements in insertion order
    pub fn contents(&self) -> &[ContentElement] {
        &self.contents
    }
}

/// Arena holding one or more overlay trees
#[derive(Debug, Clone, Default)]
pub struct Vfs {
    nodes: Vec<VNode>,
}

impl Vfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes ever allocated, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node.
    ///
    /// Ids are only handed out by this arena, so an out-of-range id is a
    /// programming error and panics like slice indexing.
    pub fn node(&self, id: NodeId) -> &VNode {
        &self.nodes[id.index()]
    }

    /// Allocate a parentless node
    pub fn add_root(&mut self, name: impl Into<String>, real_path: impl Into<PathBuf>) -> NodeId {
        self.push(VNode {
            name: name.into(),
            real_path: real_path.into(),
            parent: None,
            children: Vec::new(),
            contents: Vec::new(),
        })
    }

    /// Attach a new child with an explicit real path.
    ///
    /// Fails when `parent` already has a child called `name`.
    pub fn add_child_with_path(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        real_path: impl Into<PathBuf>,
    ) -> DistResult<NodeId> {
        let name = name.into();
        if self.child(parent, &name).is_some() {
            return Err(DistError::malformed(format!(
                "duplicate child '{}' under '{}'",
                name,
                self.node(parent).real_path.display()
            )));
        }
        let id = self.push(VNode {
            name,
            real_path: real_path.into(),
            parent: Some(parent),
            children: Vec::new(),
            contents: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Return the child called `name`, creating it with a derived real path
    /// (`parent.real_path/name`) when missing.
    pub fn get_or_create_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(existing) = self.child(parent, name) {
            return existing;
        }
        let real_path = self.node(parent).real_path.join(name);
        let id = self.push(VNode {
            name: name.to_string(),
            real_path,
            parent: Some(parent),
            children: Vec::new(),
            contents: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Direct child lookup by name
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .copied()
            .find(|child| self.node(*child).name == name)
    }

    /// Add a content element. Returns `false` if an equal element was
    /// already present (set semantics).
    pub fn add_content(&mut self, id: NodeId, element: ContentElement) -> bool {
        let contents = &mut self.nodes[id.index()].contents;
        if contents.contains(&element) {
            return false;
        }
        contents.push(element);
        true
    }

    /// Walk `path` from `root`, creating every missing segment.
    ///
    /// Root, prefix and `.` components are skipped, so absolute paths are
    /// treated as relative to `root`. `..` is rejected.
    pub fn resolve_path(&mut self, root: NodeId, path: &str) -> DistResult<NodeId> {
        let mut current = root;
        for component in Path::new(path).components() {
            match component {
                Component::Normal(segment) => {
                    let segment = segment.to_str().ok_or_else(|| DistError::InvalidPath {
                        path: path.to_string(),
                        component: segment.to_string_lossy().into_owned(),
                        reason: "segment is not valid UTF-8".to_string(),
                    })?;
                    current = self.get_or_create_child(current, segment);
                }
                Component::ParentDir => {
                    return Err(DistError::InvalidPath {
                        path: path.to_string(),
                        component: "..".to_string(),
                        reason: "parent traversal is not supported".to_string(),
                    });
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        Ok(current)
    }

    /// Walk `path` from `root` without creating anything
    pub fn find_path(&self, root: NodeId, path: &str) -> Option<NodeId> {
        let mut current = root;
        for component in Path::new(path).components() {
            match component {
                Component::Normal(segment) => {
                    current = self.child(current, segment.to_str()?)?;
                }
                Component::ParentDir => return None,
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        Some(current)
    }

    /// Detach every direct child of `id` whose name matches `predicate`.
    ///
    /// Grandchildren and contents are left alone. Returns how many children
    /// were removed.
    pub fn remove_children_where<P>(&mut self, id: NodeId, mut predicate: P) -> usize
    where
        P: FnMut(&str) -> bool,
    {
        let before = self.node(id).children.len();
        let kept: Vec<NodeId> = self
            .node(id)
            .children
            .iter()
            .copied()
            .filter(|child| !predicate(&self.node(*child).name))
            .collect();
        let removed = before - kept.len();
        self.nodes[id.index()].children = kept;
        removed
    }

    /// Number of nodes reachable from `root` through ownership
    pub fn node_count(&self, root: NodeId) -> usize {
        1 + self
            .node(root)
            .children
            .iter()
            .map(|child| self.node_count(*child))
            .sum::<usize>()
    }

    /// Deep structural comparison of two subtrees, possibly in different
    /// arenas. Copy sources are compared by real path.
    pub fn structurally_eq(&self, a: NodeId, other: &Vfs, b: NodeId) -> bool {
        let left = self.node(a);
        let right = other.node(b);

        if left.name != right.name
            || left.real_path != right.real_path
            || left.contents.len() != right.contents.len()
            || left.children.len() != right.children.len()
        {
            return false;
        }

        let contents_match = left
            .contents
            .iter()
            .zip(&right.contents)
            .all(|pair| match pair {
                (ContentElement::Copy(l), ContentElement::Copy(r)) => {
                    l.target_name() == r.target_name()
                        && self.node(l.source()).real_path == other.node(r.source()).real_path
                }
                (ContentElement::ModuleOutput(l), ContentElement::ModuleOutput(r)) => l == r,
                _ => false,
            });

        contents_match
            && left
                .children
                .iter()
                .zip(&right.children)
                .all(|(l, r)| self.structurally_eq(*l, other, *r))
    }

    fn push(&mut self, node: VNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
