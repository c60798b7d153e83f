//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{DistError, DistResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "distmodel.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DistResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for error and warning locations.
pub fn parse_with_warnings(content: &str, path: &Path) -> DistResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DistError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration in priority order:
/// 1. `explicit` path (an error if it cannot be read)
/// 2. `./distmodel.toml`
/// 3. user config (`<config dir>/distmodel/config.toml`)
/// 4. built-in defaults
///
/// Environment overrides are applied on top in every case.
pub fn load_or_default(explicit: Option<&Path>) -> DistResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [Some(PathBuf::from(PROJECT_CONFIG_FILE)), user_config_path()];
    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (DISTMODEL_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(dir) = std::env::var("DISTMODEL_PROJECT_DIR") {
        config.input.project_dir = PathBuf::from(dir);
    }

    if let Ok(document) = std::env::var("DISTMODEL_DOCUMENT") {
        config.input.document = PathBuf::from(document);
    }

    if let Ok(dir) = std::env::var("DISTMODEL_OUTPUT_DIR") {
        config.output.dir = PathBuf::from(dir);
    }

    config
}

/// User-level config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("distmodel").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}
