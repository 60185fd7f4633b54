//! YAML presets for non-interactive runs
//!
//! ```yaml
//! name: shop
//! typescript: true
//! tailwind: false
//! ```

use super::run_config::{ProjectName, RunConfig};
use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Answers loaded from a preset file. Missing keys stay unanswered and are
/// prompted for (or defaulted with `--yes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub typescript: Option<bool>,

    #[serde(default)]
    pub tailwind: Option<bool>,
}

impl Preset {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| ScaffoldError::Preset {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }

    /// Layer `overrides` (usually command-line flags) on top of this preset
    pub fn overridden_by(self, overrides: Preset) -> Preset {
        Preset {
            name: overrides.name.or(self.name),
            typescript: overrides.typescript.or(self.typescript),
            tailwind: overrides.tailwind.or(self.tailwind),
        }
    }

    /// True when no prompt is needed
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.typescript.is_some() && self.tailwind.is_some()
    }

    /// Build a config, treating unanswered yes/no questions as "no"
    pub fn into_run_config(self) -> Result<RunConfig> {
        let name = ProjectName::parse(self.name.as_deref().unwrap_or_default())?;
        Ok(RunConfig::new(
            name,
            self.typescript.unwrap_or(false),
            self.tailwind.unwrap_or(false),
        ))
    }
}
