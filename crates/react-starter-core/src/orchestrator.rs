//! Linear generation pipeline
//!
//! `Prompting → Bootstrapping → DependencyInstall → Cleaning → Emitting → Done`
//!
//! Every phase runs to completion before the next one starts. The first error
//! ends the run; nothing already written is rolled back.

use crate::bootstrap;
use crate::cleaner;
use crate::config::RunConfig;
use crate::emit::{EmitContext, EmitStep, EMIT_ORDER};
use crate::error::Result;
use crate::runtime::CommandRunner;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

/// Pipeline state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Prompting,
    Bootstrapping,
    DependencyInstall,
    Cleaning,
    Emitting,
    Done,
}

impl Phase {
    /// Every phase, in the order a run goes through them
    pub const SEQUENCE: [Phase; 6] = [
        Phase::Prompting,
        Phase::Bootstrapping,
        Phase::DependencyInstall,
        Phase::Cleaning,
        Phase::Emitting,
        Phase::Done,
    ];

    pub fn status_line(&self) -> &'static str {
        match self {
            Phase::Prompting => "Collecting project options...",
            Phase::Bootstrapping => "Creating the Vite project...",
            Phase::DependencyInstall => "Installing dependencies...",
            Phase::Cleaning => "Cleaning up the boilerplate...",
            Phase::Emitting => "Generating folders and files...",
            Phase::Done => "React project ready!",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_line())
    }
}

/// Where and how to generate, independent of the operator's answers
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory in which `./<project name>` is created
    pub parent_dir: PathBuf,
    pub package_manager: String,
    pub vite_package: String,
    /// Skip the additional dependency groups and the lint toolchain; the
    /// template's declared dependencies are always installed
    pub skip_install: bool,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub project_dir: PathBuf,
    pub removed_boilerplate: usize,
    pub steps: Vec<EmitStep>,
}

fn announce(phase: Phase) {
    tracing::info!(?phase, "entering phase");
    match phase {
        Phase::Done => println!("\n{}", phase.status_line().green().bold()),
        _ => println!("\n{} {}", "->".blue(), phase.status_line()),
    }
}

/// Run every phase after prompting for an already collected configuration
pub async fn generate<R: CommandRunner>(
    config: &RunConfig,
    runner: &R,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let project_dir = options.parent_dir.join(config.project_name.as_str());
    let pm = options.package_manager.as_str();

    announce(Phase::Bootstrapping);
    bootstrap::create_project(runner, pm, &options.vite_package, config, &options.parent_dir)
        .await?;

    announce(Phase::DependencyInstall);
    bootstrap::install_declared(runner, pm, &project_dir).await?;
    if options.skip_install {
        tracing::info!("skipping additional dependency groups");
    } else {
        for group in bootstrap::additional_groups(config) {
            println!("  {} {}", "+".blue(), group.label);
            runner.run(&group.command(pm, &project_dir)).await?;
        }
    }

    announce(Phase::Cleaning);
    let removed_boilerplate = cleaner::clean(&project_dir, config).await?;

    announce(Phase::Emitting);
    let ctx = EmitContext {
        root: &project_dir,
        config,
        runner,
        package_manager: pm,
        skip_install: options.skip_install,
    };
    let mut steps = Vec::with_capacity(EMIT_ORDER.len());
    for step in EMIT_ORDER.iter().filter(|s| s.applies_to(config)) {
        tracing::debug!(step = %step, "emitting");
        step.emit(&ctx).await?;
        println!("  {} {}", "✓".green(), step);
        steps.push(*step);
    }

    announce(Phase::Done);

    Ok(GenerationReport {
        project_dir,
        removed_boilerplate,
        steps,
    })
}
