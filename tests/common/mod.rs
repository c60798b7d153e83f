//! Common test utilities for distmodel contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp project directory
//! - Fixtures: Reusable VFS documents and graph builders

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
