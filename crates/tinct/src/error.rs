//! Error types for theme construction and selection.
//!
//! Style composition and color resolution never fail. The only fallible
//! operations are building a theme, registering it, and selecting it.

use crate::token::TokenRole;

/// Errors raised by theme construction, parsing, and registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A theme name was selected that was never registered.
    ///
    /// Recoverable: the previously active theme stays current.
    #[error("unknown theme '{name}' (available: {})", .available.join(", "))]
    UnknownTheme {
        name: String,
        available: Vec<String>,
    },

    /// A theme is missing one or more schema roles.
    #[error("theme '{name}' is missing required token roles: {}", join_roles(.missing))]
    IncompleteTheme {
        name: String,
        missing: Vec<TokenRole>,
    },

    /// A theme definition names a role outside the schema.
    #[error("unknown token role '{0}'")]
    UnknownRole(String),

    /// A registry key was empty or whitespace.
    #[error("invalid theme name '{0}': names must be non-empty")]
    InvalidName(String),

    /// A YAML theme definition could not be parsed.
    #[error("failed to parse theme definition: {0}")]
    Parse(String),
}

impl ThemeError {
    /// Whether the caller can keep running with the previous theme.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ThemeError::UnknownTheme { .. })
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Parse(err.to_string())
    }
}

fn join_roles(roles: &[TokenRole]) -> String {
    roles
        .iter()
        .map(|r| r.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_display_lists_available() {
        let err = ThemeError::UnknownTheme {
            name: "solarized".into(),
            available: vec!["default".into(), "ember".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("solarized"));
        assert!(msg.contains("default, ember"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_incomplete_theme_display_lists_missing() {
        let err = ThemeError::IncompleteTheme {
            name: "alpha".into(),
            missing: vec![TokenRole::Primary, TokenRole::SyntaxType],
        };
        assert_eq!(
            err.to_string(),
            "theme 'alpha' is missing required token roles: primary, syntax_type"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err: ThemeError = yaml_err.into();
        assert!(matches!(err, ThemeError::Parse(_)));
    }
}
