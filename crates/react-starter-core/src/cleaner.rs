//! Removal of the Vite template's default assets and styles

use crate::config::RunConfig;
use crate::emit::template::Template;
use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Paths removed from a fresh Vite project, relative to its root
pub const BOILERPLATE: &[&str] = &[
    "src/App.css",
    "src/assets/react.svg",
    "src/assets",
    "src/logo.svg",
    "src/index.css",
    "public/vite.svg",
];

const INDEX_SCSS: &str = "@use \"./styles/global\";\n";

/// Remove a file or directory tree.
///
/// Absence and permission problems are expected across template versions and
/// are reported as `Ok(false)`; anything else is an error.
pub async fn remove_best_effort(path: &Path) -> Result<bool> {
    let result = match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path).await,
        Ok(_) => fs::remove_file(path).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
            tracing::debug!(path = %path.display(), error = %e, "skipped boilerplate removal");
            Ok(false)
        }
        Err(source) => Err(ScaffoldError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Point the entry file at the SCSS entry (and Tailwind, when enabled)
pub fn rewrite_entry_imports(source: &str, config: &RunConfig) -> String {
    let mut rewritten = source.replacen("./index.css", "./index.scss", 1);

    if config.tailwind {
        let tailwind_import = "import './styles/tailwind.css'\n";
        // Insert right after the line importing index.scss
        let insert_at = rewritten
            .find("./index.scss")
            .and_then(|pos| rewritten[pos..].find('\n').map(|nl| pos + nl + 1));
        match insert_at {
            Some(at) => rewritten.insert_str(at, tailwind_import),
            None => rewritten.insert_str(0, tailwind_import),
        }
    }

    rewritten
}

/// Remove boilerplate, write `src/index.scss` and patch `src/main.<ext>`.
/// Returns the number of removed paths.
pub async fn clean(root: &Path, config: &RunConfig) -> Result<usize> {
    let mut removed = 0;
    for relative in BOILERPLATE {
        if remove_best_effort(&root.join(relative)).await? {
            removed += 1;
        }
    }

    Template::new("src/index.scss", INDEX_SCSS)
        .write_to(root)
        .await?;

    let main_path = root.join(format!("src/main.{}", config.extension()));
    match fs::read_to_string(&main_path).await {
        Ok(source) => {
            let rewritten = rewrite_entry_imports(&source, config);
            fs::write(&main_path, rewritten)
                .await
                .map_err(|source| ScaffoldError::Write {
                    path: main_path.clone(),
                    source,
                })?;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %main_path.display(), "no entry file to rewrite");
        }
        Err(source) => {
            return Err(ScaffoldError::Read {
                path: main_path,
                source,
            })
        }
    }

    Ok(removed)
}
