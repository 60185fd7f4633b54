//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to configure scaffolding for its
//! distribution: identity, package manager and post-setup instructions.

use crate::config::RunConfig;
use std::path::Path;

/// Configuration trait for the scaffolding product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default package manager binary
    fn default_package_manager(&self) -> &'static str {
        "npm"
    }

    /// Environment variable name for overriding the package manager binary
    fn package_manager_env(&self) -> &'static str;

    /// Package passed to `<package manager> create`
    fn vite_package(&self) -> &'static str {
        "vite@latest"
    }

    /// URL for documentation of the generated stack
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, config: &RunConfig) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Package manager to invoke, honouring the environment override
    fn package_manager(&self) -> String {
        std::env::var(self.package_manager_env())
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.default_package_manager().to_string())
    }
}
