//! Optional Tailwind CSS wiring

use super::template::{write_all, Template};
use crate::config::RunConfig;
use crate::error::Result;
use std::path::Path;

/// Stylesheet imported by the entry file when Tailwind is enabled
pub const TAILWIND_STYLESHEET: &str = "src/styles/tailwind.css";

const TAILWIND_CSS: &str = "@import \"tailwindcss\";\n";

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import tailwindcss from '@tailwindcss/vite'

export default defineConfig({
  plugins: [react(), tailwindcss()],
})
"#;

/// Packages installed alongside the other dependency groups
pub const PACKAGES: &[&str] = &["tailwindcss", "@tailwindcss/vite"];

pub fn templates(config: &RunConfig) -> Vec<Template> {
    if !config.tailwind {
        return Vec::new();
    }
    vec![
        Template::new(TAILWIND_STYLESHEET, TAILWIND_CSS),
        Template::new(
            format!("vite.config.{}", config.language.module_extension()),
            VITE_CONFIG,
        ),
    ]
}

pub async fn emit(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &templates(config)).await?;
    Ok(())
}
