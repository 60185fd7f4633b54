//! Folder skeleton: documented placeholder folders, route constants, utils

use super::template::{write_all, Template};
use crate::config::RunConfig;
use crate::error::Result;
use std::path::Path;

const COMPONENTS_README: &str = "# 🧩 Components

Ce dossier contient tous les composants réutilisables de l’application.

👉 Exemple : Header, Button, Card, etc.
";

const HOOKS_README: &str = "# 🪝 Hooks

Ce dossier contient vos hooks personnalisés React.

👉 Exemple : useDarkMode, useFetch, etc.
";

const ASSETS_README: &str = "# 🎨 Assets

Ici, vous pouvez stocker :
- Vos images
- Vos polices
- Vos icônes SVG ou autres
";

const SERVICES_README: &str = "# 🛠️ Services

Ce dossier contient les services de l'application, comme les appels API ou les intégrations tierces.

👉 Exemple : AuthService, ApiService, etc.
";

const STORES_README: &str = "# 🏪 Stores

Ce dossier contient les stores de l'application, comme Redux ou Zustand.

👉 Exemple : UserStore, CartStore, etc.
";

const ROUTES_README: &str = "# 🧭 Dossier routes

📌 **Description :**
Centralise les routes de l’application.
";

const CONSTANTS_README: &str = "# 🧭 Constants

Ce dossier centralise toutes les constantes utilisées dans l'application :
- Routes
- Messages
- Clés de config
- Autres données statiques
";

const UTILS_README: &str = "# 🧠 Utils

Ce dossier contient les fonctions utilitaires partagées dans l'application.

👉 Exemples : formatDate, isValidEmail, etc.
";

/// Placeholder folders documented by a README, relative to `src/`
pub const DOCUMENTED_FOLDERS: &[(&str, &str)] = &[
    ("components", COMPONENTS_README),
    ("hooks", HOOKS_README),
    ("assets", ASSETS_README),
    ("services", SERVICES_README),
    ("stores", STORES_README),
];

pub fn folder_templates() -> Vec<Template> {
    DOCUMENTED_FOLDERS
        .iter()
        .map(|(folder, readme)| Template::new(format!("src/{folder}/README.md"), *readme))
        .collect()
}

pub fn routes_folder_templates() -> Vec<Template> {
    vec![Template::new("src/routes/README.md", ROUTES_README)]
}

/// Path-constant route table. Pages and layouts are wired in `routes/index`.
fn route_constants(config: &RunConfig) -> String {
    let suffix = if config.typescript() { " as const" } else { "" };
    format!(
        "export const ROUTES = {{
  HOME: '/',
  NOT_FOUND: '*',
}}{suffix}
"
    )
}

pub fn constants_and_utils_templates(config: &RunConfig) -> Vec<Template> {
    vec![
        Template::new("src/constants/README.md", CONSTANTS_README),
        Template::new(
            format!("src/constants/routes.{}", config.language.module_extension()),
            route_constants(config),
        ),
        Template::new("src/utils/README.md", UTILS_README),
    ]
}

pub async fn emit_folders(root: &Path) -> Result<()> {
    write_all(root, &folder_templates()).await?;
    Ok(())
}

pub async fn emit_routes_folder(root: &Path) -> Result<()> {
    write_all(root, &routes_folder_templates()).await?;
    Ok(())
}

pub async fn emit_constants_and_utils(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &constants_and_utils_templates(config)).await?;
    Ok(())
}
