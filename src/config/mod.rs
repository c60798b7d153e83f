//! Configuration module for distmodel
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DISTMODEL_*)
//! 3. Explicit `--config` file, else `./distmodel.toml`
//! 4. User config (`~/.config/distmodel/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{load_or_default, user_config_path, with_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{Config, InputConfig, OutputConfig};
