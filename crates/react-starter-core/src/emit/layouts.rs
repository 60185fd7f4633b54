//! Layout components wrapping routed pages

use super::template::{write_all, Template};
use crate::config::RunConfig;
use crate::error::Result;
use std::path::Path;

const LAYOUTS_README: &str = "# 🖼️ Layouts

Ce dossier contient les layouts globaux (Header/Footer persistants, wrappers, etc.).

👉 Exemple : DefaultLayout
";

const DEFAULT_LAYOUT: &str = r#"import Navbar from "../components/Navbar/Navbar"
import { Outlet } from "react-router-dom"

const DefaultLayout = () => {
  return (
    <>
      <Navbar />
      <main>
        <Outlet />
      </main>
    </>
  )
}

export default DefaultLayout
"#;

const ADMIN_LAYOUT: &str = r#"import { Outlet } from 'react-router-dom'

export default function AdminLayout() {
  return (
    <div className="admin-layout">
      <aside>Admin Menu</aside>
      <main>
        <Outlet />
      </main>
    </div>
  )
}
"#;

pub fn templates(config: &RunConfig) -> Vec<Template> {
    let ext = config.extension();
    vec![
        Template::new("src/layouts/README.md", LAYOUTS_README),
        Template::new(format!("src/layouts/DefaultLayout.{ext}"), DEFAULT_LAYOUT),
        Template::new(format!("src/layouts/AdminLayout.{ext}"), ADMIN_LAYOUT),
    ]
}

pub async fn emit(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &templates(config)).await?;
    Ok(())
}
