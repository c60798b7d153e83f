//! Prune rule value object - which children to drop from a flattened tree

use serde::{Deserialize, Serialize};

/// Removes direct children of the node at `path` (relative to the flattened
/// root; empty means the root itself).
///
/// A child is removed when `keep` is non-empty and does not list it, or when
/// its name ends with any of `drop_suffixes`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PruneRule {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub keep: Vec<String>,
    #[serde(default)]
    pub drop_suffixes: Vec<String>,
}

impl PruneRule {
    /// Keep only the listed children of `path`
    pub fn keep_only(path: impl Into<String>, keep: &[&str]) -> Self {
        Self {
            path: path.into(),
            keep: keep.iter().map(|s| s.to_string()).collect(),
            drop_suffixes: Vec::new(),
        }
    }

    /// Drop children of `path` whose names end with any suffix
    pub fn drop_suffixes(path: impl Into<String>, suffixes: &[&str]) -> Self {
        Self {
            path: path.into(),
            keep: Vec::new(),
            drop_suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether a child called `name` should be removed
    pub fn removes(&self, name: &str) -> bool {
        let not_kept = !self.keep.is_empty() && !self.keep.iter().any(|k| k == name);
        let dropped = self.drop_suffixes.iter().any(|s| name.ends_with(s.as_str()));
        not_kept || dropped
    }
}
