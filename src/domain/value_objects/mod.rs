//! Value Objects
//!
//! Small immutable types shared by configuration and domain services.

mod config_warning;
mod prune_rule;

pub use config_warning::ConfigWarning;
pub use prune_rule::PruneRule;
