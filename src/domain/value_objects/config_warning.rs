//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Raised for keys in a config file that no setting consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key, as a dotted path (e.g. `output.prety`)
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            ),
            None => write!(f, "unknown config key '{}' in {}", self.key, self.file.display()),
        }
    }
}
