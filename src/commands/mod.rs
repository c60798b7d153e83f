//! Command handlers for the `distmodel` binary

pub mod check;
pub mod flatten;
pub mod run;

pub use check::cmd_check;
pub use flatten::cmd_flatten;
pub use run::cmd_run;
