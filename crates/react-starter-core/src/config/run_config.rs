//! Answers collected for a single run

use crate::error::{Result, ScaffoldError};
use std::fmt;

/// npm refuses package names longer than this
const MAX_NAME_LEN: usize = 214;

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn from_typescript_flag(typescript: bool) -> Self {
        if typescript {
            Language::TypeScript
        } else {
            Language::JavaScript
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Extension for files containing JSX (components, pages, layouts)
    pub fn component_extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }

    /// Extension for plain modules (route constants, vite config)
    pub fn module_extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Template selector passed to `create vite`
    pub fn vite_template(&self) -> &'static str {
        match self {
            Language::TypeScript => "react-ts",
            Language::JavaScript => "react",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A project name that is safe to use both as a path segment and as a
/// command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        let invalid = |reason| ScaffoldError::InvalidProjectName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name must be at most 214 characters"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name must not be a relative path"));
        }
        if name.starts_with('.') || name.starts_with('_') {
            return Err(invalid("name must not start with '.' or '_'"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(invalid(
                "only letters, digits, '-', '_' and '.' are allowed",
            ));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Everything the operator chose. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub project_name: ProjectName,
    pub language: Language,
    pub tailwind: bool,
}

impl RunConfig {
    pub fn new(project_name: ProjectName, typescript: bool, tailwind: bool) -> Self {
        Self {
            project_name,
            language: Language::from_typescript_flag(typescript),
            tailwind,
        }
    }

    pub fn typescript(&self) -> bool {
        self.language == Language::TypeScript
    }

    /// `tsx` or `jsx`
    pub fn extension(&self) -> &'static str {
        self.language.component_extension()
    }

    /// `react-ts` or `react`
    pub fn template(&self) -> &'static str {
        self.language.vite_template()
    }
}

/// Yes/no answers are affirmative only for `o`, the token the `(o/n)` prompts offer.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("o")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_follows_typescript_flag() {
        let name = ProjectName::parse("demo").unwrap();
        assert_eq!(RunConfig::new(name.clone(), true, false).extension(), "tsx");
        assert_eq!(RunConfig::new(name, false, false).extension(), "jsx");
    }

    #[test]
    fn test_template_selector() {
        let name = ProjectName::parse("demo").unwrap();
        assert_eq!(RunConfig::new(name.clone(), true, false).template(), "react-ts");
        assert_eq!(RunConfig::new(name, false, false).template(), "react");
    }

    #[test]
    fn test_affirmative_is_case_insensitive() {
        assert!(is_affirmative("o"));
        assert!(is_affirmative("O"));
        assert!(is_affirmative("  o "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("y"));
    }

    #[test]
    fn test_only_the_offered_token_is_affirmative() {
        assert!(!is_affirmative("oui"));
        assert!(!is_affirmative("OUI"));
        assert!(!is_affirmative("on"));
    }

    #[test]
    fn test_valid_project_names() {
        assert_eq!(ProjectName::parse("  shop ").unwrap().as_str(), "shop");
        assert!(ProjectName::parse("my-app_2.0").is_ok());
    }

    #[test]
    fn test_rejects_unsafe_project_names() {
        for raw in ["", "   ", ".", "..", ".hidden", "_private", "../escape", "a b", "a;rm -rf", "a/b"] {
            assert!(ProjectName::parse(raw).is_err(), "accepted {raw:?}");
        }
        assert!(ProjectName::parse(&"a".repeat(215)).is_err());
    }
}
