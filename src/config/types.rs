//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PruneRule;
use crate::error::DistResult;

use super::loader;

/// Where the VFS document lives and which subtree to flatten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// VFS JSON document
    pub document: PathBuf,
    /// Project directory the dist path is relative to
    pub project_dir: PathBuf,
    /// Subtree to flatten, relative to `project_dir`
    pub dist_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from("data/02-vfs.json"),
            project_dir: PathBuf::from("."),
            dist_path: "dist".to_string(),
        }
    }
}

impl InputConfig {
    /// Full VFS path of the subtree to flatten
    pub fn vfs_path(&self) -> PathBuf {
        self.project_dir.join(&self.dist_path)
    }
}

/// Report and descriptor output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory every output file is written to
    pub dir: PathBuf,
    /// File name of the flattened tree report
    pub flattened_report: String,
    /// File name of the encoded flattened VFS, if wanted
    pub flattened_document: Option<String>,
    /// File name of the descriptor JSON
    pub descriptors: String,
    /// Name of the root descriptor; defaults to the flattened root's name
    pub root_name: Option<String>,
    /// Indent the descriptor JSON
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("result/idea-artifacts-cfg"),
            flattened_report: "03-flattened-vfs.txt".to_string(),
            flattened_document: None,
            descriptors: "04-idea-artifacts.json".to_string(),
            root_name: None,
            pretty: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    /// Applied in order to the flattened tree
    pub prune: Vec<PruneRule>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> DistResult<Self> {
        loader::parse_with_warnings(content, Path::new("<inline>")).map(|(config, _)| config)
    }
}
