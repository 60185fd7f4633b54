//! Template persistence primitives

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// A file to generate: a path relative to the project root and its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub path: PathBuf,
    pub contents: String,
}

impl Template {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Write under `root`, creating parent directories and replacing any
    /// existing file at that path.
    pub async fn write_to(&self, root: &Path) -> Result<PathBuf> {
        let target = root.join(&self.path);
        if let Some(parent) = target.parent() {
            ensure_dir(parent).await?;
        }
        fs::write(&target, &self.contents)
            .await
            .map_err(|source| ScaffoldError::Write {
                path: target.clone(),
                source,
            })?;
        tracing::trace!(path = %target.display(), "wrote template");
        Ok(target)
    }
}

/// Create a directory and its parents; succeeds if it already exists
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| ScaffoldError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

/// Write every template in order, stopping at the first failure
pub async fn write_all(root: &Path, templates: &[Template]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(templates.len());
    for template in templates {
        written.push(template.write_to(root).await?);
    }
    Ok(written)
}
