//! Tree Report Service
//!
//! Plain-text dump of a (usually flattened) tree, one node per line with its
//! content elements underneath and children indented by two spaces.

use std::fmt::Write;

use crate::domain::entities::{ContentElement, NodeId, Vfs};
use crate::domain::ports::FileSystem;

const INDENT: &str = "  ";

/// Render the subtree under `node`
pub fn render_tree(vfs: &Vfs, node: NodeId, fs: &dyn FileSystem) -> String {
    let mut out = String::new();
    render_node(vfs, node, fs, 0, &mut out);
    out
}

/// One-line description of a content element, e.g. `COPY OF /a -> b`
pub fn describe_content(vfs: &Vfs, element: &ContentElement) -> String {
    match element {
        ContentElement::Copy(copy) => {
            let source = vfs.node(copy.source()).real_path().display();
            match copy.target_name() {
                Some(name) => format!("COPY OF {} -> {}", source, name),
                None => format!("COPY OF {}", source),
            }
        }
        ContentElement::ModuleOutput(output) => format!("COMPILE OUTPUT {}", output.project_id()),
    }
}

fn render_node(vfs: &Vfs, id: NodeId, fs: &dyn FileSystem, depth: usize, out: &mut String) {
    let node = vfs.node(id);
    let indent = INDENT.repeat(depth);
    let existed = if fs.exists(node.real_path()) {
        " EXISTED"
    } else {
        ""
    };
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}{}{}:", indent, node.real_path().display(), existed);
    for element in node.contents() {
        let _ = writeln!(out, "{}{}{}", indent, INDENT, describe_content(vfs, element));
    }
    for &child in node.children() {
        render_node(vfs, child, fs, depth + 1, out);
    }
}
