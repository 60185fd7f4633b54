//! React Starter Core - Library behind the `react-starter` CLI
//!
//! Scaffolds a React + Vite project: the framework's own generator creates
//! the base project, then this crate installs extra dependencies, removes the
//! template's boilerplate and overlays a fixed folder structure, SCSS
//! architecture, routing and lint configuration.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template emitters, boilerplate cleaning,
//!   external command execution and runtime detection
//! - **Layer 2: Workflow Orchestration** - [`orchestrator::generate`], driven by
//!   an immutable [`RunConfig`] and a [`CommandRunner`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use react_starter_core::{orchestrator, GenerateOptions, ProjectName, RunConfig, SystemRunner};
//!
//! let config = RunConfig::new(ProjectName::parse("demo")?, false, false);
//! let options = GenerateOptions {
//!     parent_dir: std::env::current_dir()?,
//!     package_manager: "npm".into(),
//!     vite_package: "vite@latest".into(),
//!     skip_install: false,
//! };
//! orchestrator::generate(&config, &SystemRunner, &options).await?;
//! ```

pub mod bootstrap;
pub mod cleaner;
pub mod config;
pub mod emit;
pub mod error;
pub mod orchestrator;
pub mod product;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Language, Preset, ProjectName, RunConfig};
pub use emit::{EmitStep, Template, EMIT_ORDER};
pub use error::ScaffoldError;
pub use orchestrator::{generate, GenerateOptions, GenerationReport, Phase};
pub use product::ProductConfig;
pub use runtime::{CommandRunner, CommandSpec, SystemRunner};

#[cfg(feature = "tui")]
pub use tui::run;
