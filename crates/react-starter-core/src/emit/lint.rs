//! ESLint + Prettier configuration and the `lint` npm script

use super::template::{write_all, Template};
use crate::error::{Result, ScaffoldError};
use crate::runtime::CommandSpec;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Dev dependencies installed before the configuration is written
pub const PACKAGES: &[&str] = &[
    "eslint",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-react",
];

const ESLINT_CONFIG: &str = r#"module.exports = {
  env: {
    browser: true,
    es2021: true,
  },
  extends: [
    'eslint:recommended',
    'plugin:react/recommended',
    'prettier'
  ],
  parserOptions: {
    ecmaVersion: 'latest',
    sourceType: 'module',
  },
  plugins: ['react'],
  rules: {},
  settings: {
    react: {
      version: 'detect',
    },
  },
}
"#;

const PRETTIER_CONFIG: &str = r#"{
  "semi": false,
  "singleQuote": true,
  "trailingComma": "es5"
}
"#;

const IGNORE: &str = "node_modules
dist
build
";

pub const LINT_SCRIPT: (&str, &str) = ("lint", "eslint .");

/// `npm install -D <lint toolchain>` inside the project
pub fn install_command(package_manager: &str, project_dir: &Path) -> CommandSpec {
    let args = ["install", "-D"].into_iter().chain(PACKAGES.iter().copied());
    CommandSpec::new(package_manager, args).current_dir(project_dir)
}

pub fn templates() -> Vec<Template> {
    vec![
        Template::new(".eslintrc.cjs", ESLINT_CONFIG),
        Template::new(".prettierrc", PRETTIER_CONFIG),
        Template::new(".eslintignore", IGNORE),
        Template::new(".prettierignore", IGNORE),
    ]
}

/// Insert the `lint` script, keeping every other key and its position
pub fn add_lint_script(manifest: &str, path: &Path) -> Result<String> {
    let to_err = |source| ScaffoldError::Manifest {
        path: path.to_path_buf(),
        source,
    };

    let mut pkg: Value = serde_json::from_str(manifest).map_err(to_err)?;
    let Some(root) = pkg.as_object_mut() else {
        return Err(to_err(serde::de::Error::custom(
            "package.json must contain a JSON object",
        )));
    };

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        *scripts = Value::Object(Map::new());
    }
    if let Value::Object(scripts) = scripts {
        scripts.insert(LINT_SCRIPT.0.to_string(), Value::from(LINT_SCRIPT.1));
    }

    let mut out = serde_json::to_string_pretty(&pkg).map_err(to_err)?;
    out.push('\n');
    Ok(out)
}

async fn patch_package_json(root: &Path) -> Result<()> {
    let path = root.join("package.json");
    let manifest = fs::read_to_string(&path)
        .await
        .map_err(|source| ScaffoldError::Read {
            path: path.clone(),
            source,
        })?;
    let patched = add_lint_script(&manifest, &path)?;
    fs::write(&path, patched)
        .await
        .map_err(|source| ScaffoldError::Write { path, source })
}

/// Write the lint configuration files and register the `lint` script.
/// The toolchain itself is installed by the caller beforehand.
pub async fn emit(root: &Path) -> Result<()> {
    write_all(root, &templates()).await?;
    patch_package_json(root).await
}
