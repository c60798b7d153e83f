//! FileSystem port - existence predicates over real paths
//!
//! The flattener asks whether copy sources exist; the descriptor builder asks
//! whether they are directories. Nothing else in the domain touches disk.

use std::path::Path;

/// Abstract file system predicates
///
/// Implementations:
/// - `LocalFs` - standard library metadata lookups
/// - `MemoryFs` - in-memory path set for testing
pub trait FileSystem {
    /// Check if a file or directory exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;
}
