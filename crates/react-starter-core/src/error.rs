//! Error types for scaffolding operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating a project.
///
/// Every variant except the ones absorbed by the boilerplate cleaner is fatal:
/// the orchestrator stops at the first error and leaves whatever is on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("command `{command}` failed with exit code {}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid preset {}: {source}", .path.display())]
    Preset {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
