#![allow(dead_code)]

use react_starter_core::error::Result;
use react_starter_core::{CommandRunner, CommandSpec, GenerateOptions, ScaffoldError};
use std::cell::RefCell;
use std::fs;
use std::path::Path;

/// Stands in for npm: `create` lays out a minimal Vite project, everything
/// else is only recorded.
#[derive(Default)]
pub struct FakeNpm {
    pub commands: RefCell<Vec<CommandSpec>>,
    /// Fail the first command whose rendering starts with this prefix
    pub fail_on: Option<String>,
}

impl FakeNpm {
    pub fn failing_on(prefix: &str) -> Self {
        Self {
            fail_on: Some(prefix.to_string()),
            ..Self::default()
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.to_string()).collect()
    }
}

fn scaffold_vite(parent: &Path, name: &str, template: &str) {
    let ext = if template == "react-ts" { "tsx" } else { "jsx" };
    let root = parent.join(name);
    fs::create_dir_all(root.join("src/assets")).unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
    fs::write(
        root.join("package.json"),
        format!(
            "{{\n  \"name\": \"{name}\",\n  \"private\": true,\n  \"type\": \"module\",\n  \"scripts\": {{\n    \"dev\": \"vite\"\n  }}\n}}\n"
        ),
    )
    .unwrap();
    fs::write(
        root.join(format!("src/main.{ext}")),
        format!("import './index.css'\nimport App from './App.{ext}'\n"),
    )
    .unwrap();
    fs::write(root.join(format!("src/App.{ext}")), "export default function App() {}\n").unwrap();
    fs::write(root.join("src/index.css"), ":root {}\n").unwrap();
    fs::write(root.join("src/App.css"), "#root {}\n").unwrap();
    fs::write(root.join("src/assets/react.svg"), "<svg/>").unwrap();
    fs::write(root.join("public/vite.svg"), "<svg/>").unwrap();
}

impl CommandRunner for FakeNpm {
    async fn run(&self, command: &CommandSpec) -> Result<()> {
        self.commands.borrow_mut().push(command.clone());

        let rendered = command.to_string();
        if let Some(prefix) = &self.fail_on {
            if rendered.starts_with(prefix.as_str()) {
                return Err(ScaffoldError::CommandFailed {
                    command: rendered,
                    code: Some(1),
                });
            }
        }

        if command.args.first().map(String::as_str) == Some("create") {
            let parent = command.cwd.as_deref().unwrap_or(Path::new("."));
            let name = &command.args[2];
            let template = command.args.last().unwrap();
            scaffold_vite(parent, name, template);
        }
        Ok(())
    }
}

pub fn options(parent: &Path) -> GenerateOptions {
    GenerateOptions {
        parent_dir: parent.to_path_buf(),
        package_manager: "npm".to_string(),
        vite_package: "vite@latest".to_string(),
        skip_install: false,
    }
}
