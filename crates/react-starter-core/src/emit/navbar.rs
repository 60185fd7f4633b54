//! Navbar component rendered by the default layout

use super::template::{write_all, Template};
use crate::config::RunConfig;
use crate::error::Result;
use std::path::Path;

const NAVBAR: &str = r#"import { Link } from "react-router-dom"
import styles from "./navbar.module.scss"

export default function Navbar() {
  return (
    <nav className={styles.navbar}>
      <ul>
        <li><Link to="/">Accueil</Link></li>
      </ul>
    </nav>
  )
}
"#;

const NAVBAR_STYLE: &str = r#".navbar {
  padding: 1rem;
  background-color: #f5f5f5;
  border-bottom: 1px solid #ddd;

  ul {
    display: flex;
    gap: 1rem;
    list-style: none;
  }

  a {
    text-decoration: none;
    color: #333;
    font-weight: bold;

    &:hover {
      color: #007bff;
    }
  }
}
"#;

pub fn templates(config: &RunConfig) -> Vec<Template> {
    vec![
        Template::new(
            format!("src/components/Navbar/Navbar.{}", config.extension()),
            NAVBAR,
        ),
        Template::new("src/components/Navbar/navbar.module.scss", NAVBAR_STYLE),
    ]
}

pub async fn emit(root: &Path, config: &RunConfig) -> Result<()> {
    write_all(root, &templates(config)).await?;
    Ok(())
}
