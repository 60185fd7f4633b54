//! Run configuration
//!
//! This module provides:
//! - The immutable [`RunConfig`] threaded through every generation step
//! - Project name validation
//! - Optional YAML presets for non-interactive runs

pub mod preset;
pub mod run_config;

pub use preset::Preset;
pub use run_config::{is_affirmative, Language, ProjectName, RunConfig};
