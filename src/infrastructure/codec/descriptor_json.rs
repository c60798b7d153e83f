//! Descriptor JSON output
//!
//! The descriptor tree serializes as nested `{"type", "name", "children"}`
//! objects; leaf descriptors omit `children`.

use std::io::Write;

use crate::domain::entities::DescriptorNode;
use crate::error::DistResult;

/// Write the descriptor tree, indented when `pretty` is set
pub fn write_descriptors<W: Write>(tree: &DescriptorNode, writer: W, pretty: bool) -> DistResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, tree)?;
    } else {
        serde_json::to_writer(writer, tree)?;
    }
    Ok(())
}

/// Render the descriptor tree to bytes, with a trailing newline
pub fn descriptors_to_vec(tree: &DescriptorNode, pretty: bool) -> DistResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_descriptors(tree, &mut buffer, pretty)?;
    buffer.push(b'\n');
    Ok(buffer)
}
