//! Charm-style CLI prompts using cliclack

use crate::config::{is_affirmative, Preset, ProjectName, RunConfig};
use crate::orchestrator::{self, GenerateOptions, Phase};
use crate::product::ProductConfig;
use crate::runtime::{check, SystemRunner};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (prompted when absent)
    pub name: Option<String>,

    /// `Some(true)` for TypeScript, `Some(false)` for JavaScript
    pub typescript: Option<bool>,

    /// Whether to add Tailwind CSS
    pub tailwind: Option<bool>,

    /// YAML file supplying any of the answers above
    pub preset: Option<PathBuf>,

    /// Directory in which the project folder is created
    pub directory: Option<PathBuf>,

    /// Skip the additional dependency groups and the lint toolchain (for development use)
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl CreateArgs {
    fn answers(&self) -> Result<Preset> {
        let preset = match &self.preset {
            Some(path) => {
                let preset = Preset::load(path)?;
                cliclack::log::info(format!("Using preset {}", path.display()))?;
                preset
            }
            None => Preset::default(),
        };
        Ok(preset.overridden_by(Preset {
            name: self.name.clone(),
            typescript: self.typescript,
            tailwind: self.tailwind,
        }))
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Collect answers
    tracing::debug!(phase = ?Phase::Prompting, "collecting answers");
    cliclack::log::step(Phase::Prompting.status_line())?;
    let run_config = collect_answers(&args)?;

    // Step 2: Check runtimes
    let package_manager = config.package_manager();
    check_runtimes(&package_manager)?;

    // Step 3: Generate
    let parent_dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    if !parent_dir.is_dir() {
        anyhow::bail!("Directory does not exist: {}", parent_dir.display());
    }
    let options = GenerateOptions {
        parent_dir,
        package_manager,
        vite_package: config.vite_package().to_string(),
        skip_install: args.skip_install,
    };
    if options.skip_install {
        cliclack::log::warning("Skipping additional dependency installs")?;
    }

    let report = orchestrator::generate(&run_config, &SystemRunner, &options)
        .await
        .with_context(|| format!("Failed to generate project '{}'", run_config.project_name))?;

    cliclack::log::success(format!(
        "Created {} in {}",
        run_config.project_name,
        report.project_dir.display()
    ))?;

    // Step 4: Show next steps
    print_next_steps(config, &report.project_dir, &run_config)?;

    Ok(())
}

fn collect_answers(args: &CreateArgs) -> Result<RunConfig> {
    let answers = args.answers()?;

    if answers.is_complete() || args.yes {
        let run_config = answers.into_run_config()?;
        log_choices(&run_config)?;
        return Ok(run_config);
    }

    let name = match answers.name {
        Some(name) => {
            let name = ProjectName::parse(&name)?;
            cliclack::log::info(format!("Project: {}", name))?;
            name
        }
        None => prompt_project_name()?,
    };

    let typescript = match answers.typescript {
        Some(value) => value,
        None => prompt_yes_no("Utiliser TypeScript ? (o/n)")?,
    };

    let tailwind = match answers.tailwind {
        Some(value) => value,
        None => prompt_yes_no("Ajouter Tailwind CSS ? (o/n)")?,
    };

    let run_config = RunConfig::new(name, typescript, tailwind);
    log_choices(&run_config)?;
    Ok(run_config)
}

fn prompt_project_name() -> Result<ProjectName> {
    let input: String = cliclack::input("Nom du projet")
        .placeholder("mon-projet")
        .validate(|input: &String| {
            ProjectName::parse(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact()?;

    Ok(ProjectName::parse(&input)?)
}

fn prompt_yes_no(question: &str) -> Result<bool> {
    let answer: String = cliclack::input(question)
        .placeholder("n")
        .default_input("n")
        .interact()?;

    Ok(is_affirmative(&answer))
}

fn log_choices(run_config: &RunConfig) -> Result<()> {
    let mut parts = vec![
        run_config.project_name.to_string(),
        run_config.language.display_name().to_string(),
    ];
    if run_config.tailwind {
        parts.push("Tailwind CSS".to_string());
    }
    cliclack::log::success(format!("Project: {}", parts.join(", ")))?;
    Ok(())
}

fn check_runtimes(package_manager: &str) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes(package_manager) {
        Ok((runtimes, warnings)) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| {
                    if r.available {
                        format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
                    } else {
                        format!("{} (not installed)", r.name)
                    }
                })
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));
            for warning in warnings {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing runtimes and try again.");
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &std::path::Path,
    run_config: &RunConfig,
) -> Result<()> {
    let steps = config.next_steps(project_dir, run_config);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Happy coding! Docs: {}", config.docs_url()))?;

    Ok(())
}
