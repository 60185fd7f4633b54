//! SCSS architecture: base reset, variables, mixins and the global entry

use super::template::{write_all, Template};
use crate::error::Result;
use std::path::Path;

const RESET: &str = r#"/* Reset de base */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

h1 {
  margin: 0;
  padding: 0;
}

/* Correction des tailles de police */
html {
  font-size: 16px;
  scroll-behavior: smooth;
}

/* Suppression du style des listes */
ul,
ol {
  list-style: none;
  padding: 0;
  margin: 0;
}

/* Suppression des styles par défaut des boutons et champs */
button,
input,
textarea {
  font-family: inherit;
  border: none;
  outline: none;
}

/* Suppression du soulignement des liens */
a {
  text-decoration: none;
  color: inherit;
}

/* Correction des images */
img {
  max-width: 100%;
  height: auto;
  display: block;
}
"#;

const COLORS: &str = r#"// 🎨 Couleurs globales

$primary-color: #007bff;
$secondary-color: #6c757d;
$text-color: #333;
$bg-color: #f5f5f5;
"#;

const THEME: &str = r#"// 🎨 Thème (ex : dark / light)

$light-theme: (
  background: #ffffff,
  text: #000000
);

$dark-theme: (
  background: #121212,
  text: #f5f5f5
);

// Mixin pour appliquer un thème
@mixin theme($theme) {
  background-color: map-get($theme, background);
  color: map-get($theme, text);
}
"#;

const MEDIA: &str = r#"// 📱 Mixin media query

@mixin respond-to($breakpoint) {
  @if $breakpoint == small {
    @media (max-width: 576px) { @content; }
  } @else if $breakpoint == medium {
    @media (max-width: 768px) { @content; }
  } @else if $breakpoint == large {
    @media (max-width: 992px) { @content; }
  }
}
"#;

const GLOBAL: &str = r#"@use "./variables/colors";
@use "./mixins/media";
@use "./base/reset";

/* Ajoutez ici vos styles globaux */
body {
}
"#;

pub fn templates() -> Vec<Template> {
    vec![
        Template::new("src/styles/base/_reset.scss", RESET),
        Template::new("src/styles/variables/_colors.scss", COLORS),
        Template::new("src/styles/variables/_theme.scss", THEME),
        Template::new("src/styles/mixins/_media.scss", MEDIA),
        Template::new("src/styles/global.scss", GLOBAL),
    ]
}

pub async fn emit(root: &Path) -> Result<()> {
    write_all(root, &templates()).await?;
    Ok(())
}
