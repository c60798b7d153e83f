//! Domain Layer
//!
//! Pure model and algorithms, no direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - VFS arena, content elements, descriptor tree
//! - `value_objects/` - Prune rules, config warnings
//! - `services/` - Flattener, DescriptorBuilder, pruning
//! - `ports/` - FileSystem predicates and the diagnostics sink
//!
//! ## Design Principles
//!
//! 1. **No I/O** - disk checks and notices go through ports
//! 2. **Per-call state** - traversal state never outlives one invocation
//! 3. **Ports & Adapters** - infrastructure supplies the implementations

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
