//! Domain entities
//!
//! - `Vfs` / `VNode` - the overlay filesystem arena
//! - `ContentElement` - what lands at a node (copies, module outputs)
//! - `DescriptorNode` - the packaging descriptor tree

pub mod content;
pub mod descriptor;
pub mod vfs;

pub use content::{ContentElement, CopyElement, ModuleOutputElement};
pub use descriptor::{DescriptorKind, DescriptorNode};
pub use vfs::{NodeId, VNode, Vfs};
