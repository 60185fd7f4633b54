//! Directory and template emitters
//!
//! Each step ensures its folders exist and (over)writes its files. Steps are
//! independent except for the import relationships recorded in
//! [`EmitStep::dependencies`]; [`EMIT_ORDER`] is the fixed sequence the
//! orchestrator runs and must place every step after its dependencies.

pub mod docs;
pub mod layouts;
pub mod lint;
pub mod navbar;
pub mod pages;
pub mod structure;
pub mod styles;
pub mod tailwind;
pub mod template;

use crate::config::RunConfig;
use crate::error::Result;
use crate::runtime::CommandRunner;
use std::fmt;
use std::path::Path;

pub use template::{ensure_dir, Template};

/// One emitter procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitStep {
    Structure,
    RoutesFolder,
    ConstantsAndUtils,
    Layouts,
    Styles,
    Tailwind,
    Lint,
    Navbar,
    NotFoundPage,
    PagesAndRouting,
    Env,
    App,
    Readme,
}

/// The order the orchestrator runs emitters in
pub const EMIT_ORDER: &[EmitStep] = &[
    EmitStep::Structure,
    EmitStep::RoutesFolder,
    EmitStep::ConstantsAndUtils,
    EmitStep::Layouts,
    EmitStep::Styles,
    EmitStep::Tailwind,
    EmitStep::Lint,
    EmitStep::Navbar,
    EmitStep::NotFoundPage,
    EmitStep::PagesAndRouting,
    EmitStep::Env,
    EmitStep::App,
    EmitStep::Readme,
];

impl EmitStep {
    /// Steps whose files this step's files import
    pub fn dependencies(&self) -> &'static [EmitStep] {
        match self {
            EmitStep::PagesAndRouting => &[
                EmitStep::ConstantsAndUtils,
                EmitStep::Layouts,
                EmitStep::Navbar,
                EmitStep::NotFoundPage,
            ],
            EmitStep::App => &[
                EmitStep::ConstantsAndUtils,
                EmitStep::NotFoundPage,
                EmitStep::PagesAndRouting,
            ],
            EmitStep::Tailwind => &[EmitStep::Styles],
            _ => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmitStep::Structure => "folders",
            EmitStep::RoutesFolder => "routes folder",
            EmitStep::ConstantsAndUtils => "constants and utils",
            EmitStep::Layouts => "layouts",
            EmitStep::Styles => "SCSS styles",
            EmitStep::Tailwind => "Tailwind CSS",
            EmitStep::Lint => "ESLint + Prettier",
            EmitStep::Navbar => "navbar",
            EmitStep::NotFoundPage => "404 page",
            EmitStep::PagesAndRouting => "pages and routing",
            EmitStep::Env => ".env",
            EmitStep::App => "App component",
            EmitStep::Readme => "README",
        }
    }

    /// Whether the step writes anything for this configuration
    pub fn applies_to(&self, config: &RunConfig) -> bool {
        match self {
            EmitStep::Tailwind => config.tailwind,
            _ => true,
        }
    }

    /// Files this step writes, relative to the project root.
    /// `Lint` also patches `package.json`, which is not listed.
    pub fn templates(&self, config: &RunConfig) -> Vec<Template> {
        match self {
            EmitStep::Structure => structure::folder_templates(),
            EmitStep::RoutesFolder => structure::routes_folder_templates(),
            EmitStep::ConstantsAndUtils => structure::constants_and_utils_templates(config),
            EmitStep::Layouts => layouts::templates(config),
            EmitStep::Styles => styles::templates(),
            EmitStep::Tailwind => tailwind::templates(config),
            EmitStep::Lint => lint::templates(),
            EmitStep::Navbar => navbar::templates(config),
            EmitStep::NotFoundPage => pages::not_found_templates(config),
            EmitStep::PagesAndRouting => pages::home_and_routing_templates(config),
            EmitStep::Env => docs::env_templates(),
            EmitStep::App => pages::app_templates(config),
            EmitStep::Readme => docs::readme_templates(config),
        }
    }

    /// Run the step against the project at `ctx.root`
    pub async fn emit<R: CommandRunner>(&self, ctx: &EmitContext<'_, R>) -> Result<()> {
        let (root, config) = (ctx.root, ctx.config);
        match self {
            EmitStep::Structure => structure::emit_folders(root).await,
            EmitStep::RoutesFolder => structure::emit_routes_folder(root).await,
            EmitStep::ConstantsAndUtils => structure::emit_constants_and_utils(root, config).await,
            EmitStep::Layouts => layouts::emit(root, config).await,
            EmitStep::Styles => styles::emit(root).await,
            EmitStep::Tailwind => tailwind::emit(root, config).await,
            EmitStep::Lint => {
                if !ctx.skip_install {
                    ctx.runner
                        .run(&lint::install_command(ctx.package_manager, root))
                        .await?;
                }
                lint::emit(root).await
            }
            EmitStep::Navbar => navbar::emit(root, config).await,
            EmitStep::NotFoundPage => pages::emit_not_found(root, config).await,
            EmitStep::PagesAndRouting => pages::emit_home_and_routing(root, config).await,
            EmitStep::Env => docs::emit_env(root).await,
            EmitStep::App => pages::emit_app(root, config).await,
            EmitStep::Readme => docs::emit_readme(root, config).await,
        }
    }
}

impl fmt::Display for EmitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What every emitter needs: where to write and what was chosen
pub struct EmitContext<'a, R> {
    /// Project root (`./<project name>`)
    pub root: &'a Path,
    pub config: &'a RunConfig,
    /// Used by steps that install packages before writing configuration
    pub runner: &'a R,
    pub package_manager: &'a str,
    pub skip_install: bool,
}
