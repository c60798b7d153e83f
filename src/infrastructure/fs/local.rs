//! Local File System Implementation
//!
//! Implements the FileSystem port with standard library metadata lookups,
//! plus the atomic write used for every output file.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::DistResult;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Write `content` to `path` atomically.
///
/// Parent directories are created; the content goes to a temp file in the
/// same directory which is then renamed over `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> DistResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.flush()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
