//! Themes shipped with the crate.
//!
//! Each built-in is written as an exhaustive `match` over
//! [`TokenRole`](crate::TokenRole), so extending the schema is a compile
//! error here until every palette supplies the new role.
//!
//! [`ThemeRegistry::with_builtin_themes`](crate::ThemeRegistry::with_builtin_themes)
//! registers everything in [`all`], selecting [`DEFAULT_THEME`].

pub mod default;
pub mod ember;

use super::Theme;

/// Registry name of the theme selected at startup.
pub const DEFAULT_THEME: &str = default::NAME;

/// Constructor for a built-in theme.
pub type BuiltinTheme = fn() -> Theme;

/// Every built-in theme with the name it registers under.
pub fn all() -> [(&'static str, BuiltinTheme); 2] {
    [
        (default::NAME, default::theme as BuiltinTheme),
        (ember::NAME, ember::theme as BuiltinTheme),
    ]
}

/// The theme registered as [`DEFAULT_THEME`].
pub fn default_theme() -> Theme {
    default::theme()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::AppearanceMode;
    use crate::token::TokenRole;

    #[test]
    fn test_builtin_names_are_unique() {
        let names = all().map(|(name, _)| name);
        assert_ne!(names[0], names[1]);
        assert!(names.contains(&DEFAULT_THEME));
    }

    #[test]
    fn test_builtins_populate_every_role_with_parseable_colors() {
        for (name, build) in all() {
            let theme = build();
            assert_eq!(theme.name(), name);
            for (role, color) in theme.iter() {
                for mode in [AppearanceMode::Dark, AppearanceMode::Light] {
                    assert!(
                        color.resolve(mode).to_console_color().is_some(),
                        "{}: {} has an unrenderable {} color",
                        name,
                        role,
                        mode
                    );
                }
            }
            assert_eq!(theme.iter().count(), TokenRole::COUNT);
        }
    }
}
