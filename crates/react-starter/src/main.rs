//! React Starter CLI - Project scaffolding for React + Vite

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use react_starter_core::tui::CreateArgs;
use react_starter_core::{ProductConfig, RunConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "REACT_STARTER_LOG";

/// React Starter product configuration
#[derive(Clone)]
pub struct ReactStarterConfig;

impl ProductConfig for ReactStarterConfig {
    fn name(&self) -> &'static str {
        "react-starter"
    }

    fn display_name(&self) -> &'static str {
        "React Starter"
    }

    fn package_manager_env(&self) -> &'static str {
        "REACT_STARTER_NPM"
    }

    fn docs_url(&self) -> &'static str {
        "https://vite.dev/guide/"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding React + Vite projects"
    }

    fn next_steps(&self, dir: &Path, config: &RunConfig) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Start dev server
        steps.push("npm run dev".to_string());

        // Step 3: Lint
        steps.push("npm run lint".to_string());

        // Step 4: Optional extras
        steps.push(format!(
            "Open README-advanced.md for optional extras for {}",
            config.project_name
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "react-starter")]
#[command(version)]
pub struct Args {
    /// Project name (prompted when omitted)
    pub name: Option<String>,

    /// Use TypeScript
    #[arg(long, conflicts_with = "javascript")]
    pub typescript: bool,

    /// Use JavaScript
    #[arg(long)]
    pub javascript: bool,

    /// Add Tailwind CSS
    #[arg(long, conflicts_with = "no_tailwind")]
    pub tailwind: bool,

    /// Do not add Tailwind CSS
    #[arg(long = "no-tailwind")]
    pub no_tailwind: bool,

    /// YAML preset providing name, typescript and tailwind
    #[arg(long, env = "REACT_STARTER_PRESET")]
    pub preset: Option<PathBuf>,

    /// Directory in which the project folder is created
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip the additional dependency groups and lint toolchain (for development use)
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// `--flag` / `--no-flag` pair to an optional answer
fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            typescript: tri_state(args.typescript, args.javascript),
            tailwind: tri_state(args.tailwind, args.no_tailwind),
            preset: args.preset,
            directory: args.directory,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

/// Argument parser named and described by the product configuration
fn cli<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .about(config.cli_description())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = ReactStarterConfig;
    let args = Args::from_arg_matches(&cli(&config).get_matches())?;
    init_tracing(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let result = react_starter_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
