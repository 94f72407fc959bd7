//! The [`Theme`] palette and its runtime [`ThemeBuilder`].
//!
//! A theme owns exactly one [`AdaptiveColor`] per [`TokenRole`]. There is no
//! way to hold an incomplete `Theme`:
//!
//! - [`Theme::from_fn`] takes a function over every role. Built-in themes pass
//!   an exhaustive `match`, so a new schema role is a compile error there.
//! - [`ThemeBuilder::build`] checks every role and fails with
//!   [`ThemeError::IncompleteTheme`] listing what is missing.
//! - [`Theme::from_yaml`] goes through the builder.
//!
//! # Example
//!
//! ```rust
//! use tinct::{AdaptiveColor, Theme, TokenRole};
//!
//! let base = tinct::builtin::default_theme();
//! let tweaked = Theme::builder_from(&base)
//!     .name("default-orange")
//!     .set(TokenRole::Primary, AdaptiveColor::uniform("#D97757"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tweaked.color(TokenRole::Primary).dark.as_str(), "#D97757");
//! ```

use serde_yaml::{Mapping, Value};

use crate::appearance::AppearanceMode;
use crate::color::{AdaptiveColor, ColorValue};
use crate::error::ThemeError;
use crate::token::TokenRole;

/// A complete palette mapping every [`TokenRole`] to an [`AdaptiveColor`].
///
/// Themes are immutable once built. Replacing a theme means building a new
/// one and registering it under the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Display name (registry keys are independent of it).
    name: String,
    /// One entry per role, indexed by [`TokenRole::index`].
    colors: Vec<AdaptiveColor>,
}

impl Theme {
    /// Builds a theme by asking `palette` for every role in the schema.
    pub fn from_fn<F>(name: impl Into<String>, palette: F) -> Self
    where
        F: FnMut(TokenRole) -> AdaptiveColor,
    {
        Self {
            name: name.into(),
            colors: TokenRole::ALL.iter().copied().map(palette).collect(),
        }
    }

    /// Starts an empty builder.
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    /// Starts a builder pre-populated with every color of `base`.
    pub fn builder_from(base: &Theme) -> ThemeBuilder {
        ThemeBuilder::from_theme(base)
    }

    /// Parses a theme definition from YAML.
    ///
    /// ```yaml
    /// name: alpha
    /// colors:
    ///   primary: { dark: "#D97757", light: "#D97757" }
    ///   text: "#e5e5e5"          # same value in both modes
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Parse`] for malformed YAML or color entries
    /// - [`ThemeError::UnknownRole`] for a key outside the schema
    /// - [`ThemeError::IncompleteTheme`] if any role is missing
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let doc: Value = serde_yaml::from_str(yaml)?;
        let root = doc
            .as_mapping()
            .ok_or_else(|| ThemeError::Parse("theme definition must be a mapping".into()))?;

        let mut name = None;
        let mut colors = None;
        for (key, value) in root {
            match key.as_str() {
                Some("name") => {
                    name = Some(scalar(value).ok_or_else(|| {
                        ThemeError::Parse("'name' must be a string".into())
                    })?);
                }
                Some("colors") => {
                    colors = Some(value.as_mapping().ok_or_else(|| {
                        ThemeError::Parse("'colors' must be a mapping of role to color".into())
                    })?);
                }
                _ => {
                    return Err(ThemeError::Parse(format!(
                        "unknown key in theme definition: {:?}",
                        key
                    )))
                }
            }
        }

        let colors =
            colors.ok_or_else(|| ThemeError::Parse("theme definition has no 'colors'".into()))?;
        let mut builder = ThemeBuilder::new(name.unwrap_or_else(|| "<inline>".to_string()));
        for (key, value) in colors {
            let key = key
                .as_str()
                .ok_or_else(|| ThemeError::Parse(format!("non-string role key: {:?}", key)))?;
            let role: TokenRole = key
                .parse()
                .map_err(|_| ThemeError::UnknownRole(key.to_string()))?;
            builder = builder.set(role, parse_color_entry(role, value)?);
        }
        builder.build()
    }

    /// Serializes this theme into the format read by [`Theme::from_yaml`],
    /// roles in schema order.
    pub fn to_yaml(&self) -> Result<String, ThemeError> {
        let mut colors = Mapping::new();
        for (role, color) in self.iter() {
            colors.insert(Value::from(role.name()), serde_yaml::to_value(color)?);
        }
        let mut root = Mapping::new();
        root.insert(Value::from("name"), Value::from(self.name.as_str()));
        root.insert(Value::from("colors"), Value::Mapping(colors));
        Ok(serde_yaml::to_string(&root)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy with a different display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The adaptive pair for `role`.
    pub fn color(&self, role: TokenRole) -> &AdaptiveColor {
        &self.colors[role.index()]
    }

    /// The concrete value of `role` in `mode`.
    pub fn resolve(&self, role: TokenRole, mode: AppearanceMode) -> &ColorValue {
        self.color(role).resolve(mode)
    }

    /// Every role with its color, in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenRole, &AdaptiveColor)> + '_ {
        TokenRole::ALL.iter().copied().zip(self.colors.iter())
    }
}

/// Runtime construction of a [`Theme`], checked for completeness at
/// [`build`](ThemeBuilder::build).
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    name: String,
    colors: Vec<Option<AdaptiveColor>>,
}

impl ThemeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: vec![None; TokenRole::COUNT],
        }
    }

    /// Starts from every color of `base`, to override a subset.
    pub fn from_theme(base: &Theme) -> Self {
        Self {
            name: base.name.clone(),
            colors: base.colors.iter().cloned().map(Some).collect(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set(mut self, role: TokenRole, color: AdaptiveColor) -> Self {
        self.colors[role.index()] = Some(color);
        self
    }

    /// Assigns the same color to several roles.
    pub fn set_all(mut self, roles: &[TokenRole], color: AdaptiveColor) -> Self {
        for role in roles {
            self.colors[role.index()] = Some(color.clone());
        }
        self
    }

    /// Roles that have not been set yet, in schema order.
    pub fn missing(&self) -> Vec<TokenRole> {
        TokenRole::ALL
            .iter()
            .copied()
            .filter(|role| self.colors[role.index()].is_none())
            .collect()
    }

    /// Finishes the theme.
    ///
    /// # Errors
    ///
    /// [`ThemeError::IncompleteTheme`] listing every unset role.
    pub fn build(self) -> Result<Theme, ThemeError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ThemeError::IncompleteTheme {
                name: self.name,
                missing,
            });
        }
        Ok(Theme {
            name: self.name,
            colors: self.colors.into_iter().flatten().collect(),
        })
    }
}

/// Anything the registry can turn into a complete [`Theme`].
pub trait IntoTheme {
    fn into_theme(self) -> Result<Theme, ThemeError>;
}

impl IntoTheme for Theme {
    fn into_theme(self) -> Result<Theme, ThemeError> {
        Ok(self)
    }
}

impl IntoTheme for ThemeBuilder {
    fn into_theme(self) -> Result<Theme, ThemeError> {
        self.build()
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(role: TokenRole, color: String) -> Result<String, ThemeError> {
    if color.trim().is_empty() {
        return Err(ThemeError::Parse(format!("role '{}': color is blank", role)));
    }
    Ok(color)
}

fn parse_color_entry(role: TokenRole, value: &Value) -> Result<AdaptiveColor, ThemeError> {
    if let Some(uniform) = scalar(value) {
        return Ok(AdaptiveColor::uniform(non_blank(role, uniform)?));
    }
    let map = value.as_mapping().ok_or_else(|| {
        ThemeError::Parse(format!(
            "role '{}': expected a color or a {{dark, light}} mapping",
            role
        ))
    })?;

    let mut dark = None;
    let mut light = None;
    for (key, value) in map {
        let slot = match key.as_str() {
            Some("dark") => &mut dark,
            Some("light") => &mut light,
            _ => {
                return Err(ThemeError::Parse(format!(
                    "role '{}': unknown key {:?}, expected 'dark' or 'light'",
                    role, key
                )))
            }
        };
        let color = scalar(value).ok_or_else(|| {
            ThemeError::Parse(format!("role '{}': color values must be scalars", role))
        })?;
        *slot = Some(non_blank(role, color)?);
    }

    match (dark, light) {
        (Some(dark), Some(light)) => Ok(AdaptiveColor::new(dark, light)),
        _ => Err(ThemeError::Parse(format!(
            "role '{}': both 'dark' and 'light' are required",
            role
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_builder() -> ThemeBuilder {
        ThemeBuilder::new("gray").set_all(TokenRole::ALL, AdaptiveColor::new("#111111", "#eeeeee"))
    }

    fn full_yaml(skip: Option<TokenRole>) -> String {
        let mut yaml = String::from("name: alpha\ncolors:\n");
        for role in TokenRole::ALL {
            if Some(*role) == skip {
                continue;
            }
            if *role == TokenRole::Primary {
                yaml.push_str("  primary: { dark: \"#D97757\", light: \"#C6613F\" }\n");
            } else {
                yaml.push_str(&format!("  {}: \"#808080\"\n", role.name()));
            }
        }
        yaml
    }

    #[test]
    fn test_from_fn_covers_every_role() {
        let theme = Theme::from_fn("mono", |_| AdaptiveColor::uniform("#808080"));
        assert_eq!(theme.iter().count(), TokenRole::COUNT);
        assert_eq!(theme.name(), "mono");
    }

    #[test]
    fn test_builder_complete() {
        let theme = gray_builder().build().unwrap();
        assert_eq!(
            theme.resolve(TokenRole::Error, AppearanceMode::Dark).as_str(),
            "#111111"
        );
        assert_eq!(
            theme.resolve(TokenRole::Error, AppearanceMode::Light).as_str(),
            "#eeeeee"
        );
    }

    #[test]
    fn test_builder_incomplete_lists_missing() {
        let err = ThemeBuilder::new("partial")
            .set(TokenRole::Primary, AdaptiveColor::uniform("#D97757"))
            .build()
            .unwrap_err();
        match err {
            ThemeError::IncompleteTheme { name, missing } => {
                assert_eq!(name, "partial");
                assert_eq!(missing.len(), TokenRole::COUNT - 1);
                assert!(!missing.contains(&TokenRole::Primary));
                assert_eq!(missing[0], TokenRole::Secondary);
            }
            other => panic!("expected IncompleteTheme, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_from_theme_overrides_subset() {
        let base = gray_builder().build().unwrap();
        let derived = Theme::builder_from(&base)
            .name("derived")
            .set(TokenRole::Primary, AdaptiveColor::uniform("#D97757"))
            .build()
            .unwrap();

        assert_eq!(derived.name(), "derived");
        assert_eq!(derived.color(TokenRole::Primary).light.as_str(), "#D97757");
        assert_eq!(derived.color(TokenRole::Text), base.color(TokenRole::Text));
        // base is untouched
        assert_eq!(base.color(TokenRole::Primary).light.as_str(), "#eeeeee");
    }

    #[test]
    fn test_from_yaml_complete() {
        let theme = Theme::from_yaml(&full_yaml(None)).unwrap();
        assert_eq!(theme.name(), "alpha");
        assert_eq!(
            theme.resolve(TokenRole::Primary, AppearanceMode::Dark).as_str(),
            "#D97757"
        );
        assert_eq!(
            theme.resolve(TokenRole::Primary, AppearanceMode::Light).as_str(),
            "#C6613F"
        );
        assert_eq!(theme.color(TokenRole::SyntaxType).dark.as_str(), "#808080");
    }

    #[test]
    fn test_from_yaml_missing_role() {
        let err = Theme::from_yaml(&full_yaml(Some(TokenRole::BorderNormal))).unwrap_err();
        assert_eq!(
            err,
            ThemeError::IncompleteTheme {
                name: "alpha".into(),
                missing: vec![TokenRole::BorderNormal],
            }
        );
    }

    #[test]
    fn test_from_yaml_unknown_role() {
        let yaml = format!("{}  primary_hover: \"#fff\"\n", full_yaml(None));
        let err = Theme::from_yaml(&yaml).unwrap_err();
        assert_eq!(err, ThemeError::UnknownRole("primary_hover".into()));
    }

    #[test]
    fn test_from_yaml_rejects_blank_colors() {
        for entry in [
            "  primary: \"\"\n",
            "  primary: \"   \"\n",
            "  primary: { dark: \"\", light: \"#fff\" }\n",
        ] {
            let yaml = format!("{}{}", full_yaml(Some(TokenRole::Primary)), entry);
            match Theme::from_yaml(&yaml) {
                Err(ThemeError::Parse(msg)) => {
                    assert!(msg.contains("primary") && msg.contains("blank"), "{}", msg);
                }
                other => panic!("expected Parse for {:?}, got {:?}", entry, other),
            }
        }
    }

    #[test]
    fn test_from_yaml_half_adaptive_entry() {
        let err = Theme::from_yaml("colors:\n  primary: { dark: \"#000\" }\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(msg) if msg.contains("primary")));
    }

    #[test]
    fn test_from_yaml_rejects_non_mapping() {
        assert!(matches!(
            Theme::from_yaml("- just\n- a list\n"),
            Err(ThemeError::Parse(_))
        ));
        assert!(matches!(Theme::from_yaml("colors: ["), Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_from_yaml_numeric_palette_index() {
        let yaml = full_yaml(Some(TokenRole::Info)) + "  info: 45\n";
        let theme = Theme::from_yaml(&yaml).unwrap();
        assert_eq!(theme.color(TokenRole::Info).dark.as_str(), "45");
    }

    #[test]
    fn test_to_yaml_reloads_identically() {
        let theme = Theme::from_yaml(&full_yaml(None)).unwrap();
        let reloaded = Theme::from_yaml(&theme.to_yaml().unwrap()).unwrap();
        assert_eq!(reloaded, theme);
    }

    #[test]
    fn test_unnamed_definition_keeps_inline_name_through_reload() {
        let yaml = full_yaml(None).replace("name: alpha\n", "");
        let theme = Theme::from_yaml(&yaml).unwrap();
        assert_eq!(theme.name(), "<inline>");

        let copied = ThemeBuilder::from_theme(&theme).build().unwrap();
        assert_eq!(copied.name(), "<inline>");

        let reloaded = Theme::from_yaml(&theme.to_yaml().unwrap()).unwrap();
        assert_eq!(reloaded.name(), "<inline>");
    }

    #[test]
    fn test_into_theme_for_builder_propagates_error() {
        let result = ThemeBuilder::new("empty").into_theme();
        assert!(matches!(result, Err(ThemeError::IncompleteTheme { .. })));
    }
}
