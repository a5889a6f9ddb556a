//! Runtime detection and package manager invocation
//!
//! This module provides:
//! - Bun detection and minimum-version checks
//! - Streaming execution of `bun` subcommands during project init

pub mod check;
pub mod package_manager;
pub mod version;

pub use check::{check_bun, require_bun, RuntimeInfo};
pub use package_manager::PackageManager;
