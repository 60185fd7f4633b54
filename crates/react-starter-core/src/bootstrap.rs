//! Base project creation through `create vite` and dependency installs

use crate::config::RunConfig;
use crate::emit::tailwind;
use crate::error::Result;
use crate::runtime::{CommandRunner, CommandSpec};
use std::path::Path;

/// `<pm> create <vite package> <name> -- --template <react|react-ts>`, run
/// from the directory that will contain the project
pub fn create_command(
    package_manager: &str,
    vite_package: &str,
    config: &RunConfig,
    parent_dir: &Path,
) -> CommandSpec {
    CommandSpec::new(
        package_manager,
        [
            "create",
            vite_package,
            config.project_name.as_str(),
            "--",
            "--template",
            config.template(),
        ],
    )
    .current_dir(parent_dir)
}

/// A named group of packages installed in one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGroup {
    pub label: &'static str,
    pub packages: Vec<&'static str>,
}

impl DependencyGroup {
    pub fn command(&self, package_manager: &str, project_dir: &Path) -> CommandSpec {
        let args = std::iter::once("install").chain(self.packages.iter().copied());
        CommandSpec::new(package_manager, args).current_dir(project_dir)
    }
}

/// Extra packages installed after the declared ones, in install order
pub fn additional_groups(config: &RunConfig) -> Vec<DependencyGroup> {
    let mut groups = vec![
        DependencyGroup {
            label: "SCSS",
            packages: vec!["sass"],
        },
        DependencyGroup {
            label: "React Router",
            packages: vec!["react-router-dom"],
        },
    ];
    if config.tailwind {
        groups.push(DependencyGroup {
            label: "Tailwind CSS",
            packages: tailwind::PACKAGES.to_vec(),
        });
    }
    groups
}

/// Materialise `./<name>` with the framework's own generator
pub async fn create_project<R: CommandRunner>(
    runner: &R,
    package_manager: &str,
    vite_package: &str,
    config: &RunConfig,
    parent_dir: &Path,
) -> Result<()> {
    runner
        .run(&create_command(package_manager, vite_package, config, parent_dir))
        .await
}

/// `npm install` for the dependencies the template declares
pub async fn install_declared<R: CommandRunner>(
    runner: &R,
    package_manager: &str,
    project_dir: &Path,
) -> Result<()> {
    runner
        .run(&CommandSpec::new(package_manager, ["install"]).current_dir(project_dir))
        .await
}
