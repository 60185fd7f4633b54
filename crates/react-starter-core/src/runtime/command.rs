//! Spawn-and-wait execution of external commands
//!
//! Commands inherit the controlling terminal so the operator sees npm's own
//! progress output. There is no timeout: a stalled install blocks the run.

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A fully described external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` runs in the current directory
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes external commands to completion
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run the command and wait for it. A non-zero exit is an error.
    async fn run(&self, command: &CommandSpec) -> Result<()>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec) -> Result<()> {
        println!("{} {}", "Running:".dimmed(), command.to_string().yellow());
        tracing::debug!(command = %command, cwd = ?command.cwd, "spawning");

        let mut cmd = TokioCommand::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &command.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|source| ScaffoldError::Spawn {
            program: command.program.clone(),
            source,
        })?;

        tracing::debug!(command = %command, code = ?status.code(), "exited");

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
