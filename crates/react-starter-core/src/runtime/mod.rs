//! Runtime detection and external command execution
//!
//! This module provides:
//! - Node.js / package manager detection
//! - A [`CommandRunner`] seam for spawning package-manager commands

pub mod check;
pub mod command;

pub use check::{check_node, check_package_manager, check_runtimes, RuntimeInfo};
pub use command::{CommandRunner, CommandSpec, SystemRunner};
