//! In-memory FileSystem for tests and dry runs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;

/// Path-set backed file system.
///
/// Only paths registered with `with_file` / `with_dir` exist, unless the
/// instance was built with `everything_exists`, in which case every path
/// exists and only registered directories are directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    everything_exists: bool,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file system on which every path exists
    pub fn everything_exists() -> Self {
        Self {
            everything_exists: true,
            ..Self::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.everything_exists || self.files.contains(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}
