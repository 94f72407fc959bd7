//! The theme registry: named themes, the current selection, and the
//! appearance mode.
//!
//! # Concurrency
//!
//! Renders read far more often than users switch themes. The current theme is
//! held in an [`ArcSwap`], so readers never take a lock: [`ThemeRegistry::snapshot`]
//! loads one `Arc` and every color resolved through that snapshot comes from
//! the same theme and the same mode. A composition in flight while another
//! thread calls [`set_current`](ThemeRegistry::set_current) sees either the old
//! theme or the new one, never a mix.
//!
//! The name map sits behind an `RwLock` that writers hold only for the
//! insert-and-swap:
//!
//! - `register` holds the write lock while it inserts and, if the name is the
//!   current selection, repoints the active theme.
//! - `set_current` holds the read lock across its swap, so a concurrent
//!   re-registration of the same name cannot slip between lookup and swap.
//!
//! # Startup invariant
//!
//! A registry is always constructed with a theme selected, so
//! [`current`](ThemeRegistry::current) has no failure path.
//!
//! ```rust
//! use tinct::{AppearanceMode, Intent, InputState, ThemeRegistry, TokenRole};
//!
//! let registry = ThemeRegistry::with_builtin_themes().with_appearance(AppearanceMode::Dark);
//! registry.set_current("ember").unwrap();
//!
//! let style = registry.style_for(Intent::InputBox(InputState::Focused));
//! let primary = registry.snapshot().color(TokenRole::Primary).clone();
//! assert_eq!(style.border.unwrap().color, primary);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::appearance::{detect_appearance_mode, AppearanceCell, AppearanceMode};
use crate::color::{AdaptiveColor, ColorValue};
use crate::compose::{compose, ComposedStyle, Intent};
use crate::error::ThemeError;
use crate::theme::{builtin, IntoTheme, Theme};
use crate::token::TokenRole;

#[derive(Debug)]
struct ActiveTheme {
    name: String,
    theme: Arc<Theme>,
}

/// Process-wide theme state, passed to widgets by reference.
///
/// See the [module docs](self) for the concurrency model.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: RwLock<HashMap<String, Arc<Theme>>>,
    active: ArcSwap<ActiveTheme>,
    appearance: AppearanceCell,
}

impl ThemeRegistry {
    /// Creates a registry holding `theme` under `name`, selected as current.
    ///
    /// The appearance starts as [`AppearanceMode::Dark`]; see
    /// [`with_appearance`](Self::with_appearance).
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidName`] for an empty name, or the theme's own
    /// construction error.
    pub fn new<T: IntoTheme>(name: &str, theme: T) -> Result<Self, ThemeError> {
        let name = validate_name(name)?;
        Ok(Self::seeded(name.to_string(), theme.into_theme()?))
    }

    /// Creates a registry with every built-in theme, selects the default one,
    /// and detects the appearance mode from the environment.
    pub fn with_builtin_themes() -> Self {
        let registry =
            Self::seeded(builtin::DEFAULT_THEME.to_string(), builtin::default_theme())
                .with_appearance(detect_appearance_mode());
        {
            let mut themes = registry.write_themes();
            for (name, build) in builtin::all() {
                themes
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(build()));
            }
        }
        debug!(themes = builtin::all().len(), "registered built-in themes");
        registry
    }

    fn seeded(name: String, theme: Theme) -> Self {
        let theme = Arc::new(theme);
        let mut themes = HashMap::new();
        themes.insert(name.clone(), Arc::clone(&theme));
        Self {
            themes: RwLock::new(themes),
            active: ArcSwap::from_pointee(ActiveTheme { name, theme }),
            appearance: AppearanceCell::default(),
        }
    }

    /// Sets the initial appearance, returning the registry for chaining.
    pub fn with_appearance(self, mode: AppearanceMode) -> Self {
        self.appearance.store(mode);
        self
    }

    /// Inserts or replaces the theme under `name`.
    ///
    /// Replacing is never an error. If `name` is the current selection, the
    /// active theme is repointed to the new instance in the same step, so the
    /// next resolution uses it.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::InvalidName`] for an empty name
    /// - [`ThemeError::IncompleteTheme`] when `theme` is a builder missing roles
    ///
    /// On error the registry is left untouched.
    pub fn register<T: IntoTheme>(&self, name: &str, theme: T) -> Result<(), ThemeError> {
        let name = validate_name(name)?;
        let theme = Arc::new(theme.into_theme()?);

        let mut themes = self.write_themes();
        let replaced = themes
            .insert(name.to_string(), Arc::clone(&theme))
            .is_some();
        let is_current = self.active.load().name == name;
        if is_current {
            self.active.store(Arc::new(ActiveTheme {
                name: name.to_string(),
                theme,
            }));
        }
        drop(themes);

        debug!(
            theme.name = name,
            theme.replaced = replaced,
            theme.current = is_current,
            "registered theme"
        );
        Ok(())
    }

    /// Makes the theme registered under `name` current.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownTheme`] if nothing is registered under `name`. The
    /// previous theme stays current.
    pub fn set_current(&self, name: &str) -> Result<(), ThemeError> {
        let themes = self.read_themes();
        let Some(theme) = themes.get(name) else {
            let mut available: Vec<String> = themes.keys().cloned().collect();
            available.sort();
            warn!(theme.name = name, "ignoring selection of unknown theme");
            return Err(ThemeError::UnknownTheme {
                name: name.to_string(),
                available,
            });
        };

        let previous = self.active.swap(Arc::new(ActiveTheme {
            name: name.to_string(),
            theme: Arc::clone(theme),
        }));
        drop(themes);

        info!(theme.from = %previous.name, theme.to = name, "theme switched");
        Ok(())
    }

    /// The current theme. Never fails.
    pub fn current(&self) -> Arc<Theme> {
        Arc::clone(&self.active.load().theme)
    }

    /// Registry name of the current theme.
    pub fn current_name(&self) -> String {
        self.active.load().name.clone()
    }

    /// One consistent view of the current theme and appearance mode.
    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            active: self.active.load_full(),
            mode: self.appearance.load(),
        }
    }

    /// Composes the style for `intent` against the current snapshot.
    pub fn style_for(&self, intent: Intent) -> ComposedStyle {
        compose(intent, &self.snapshot())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.read_themes().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read_themes().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_themes().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read_themes().len()
    }

    /// Always false: a registry is created with its default theme.
    pub fn is_empty(&self) -> bool {
        self.read_themes().is_empty()
    }

    pub fn appearance(&self) -> AppearanceMode {
        self.appearance.load()
    }

    /// Changes the appearance mode. Takes effect at the next resolution.
    pub fn set_appearance(&self, mode: AppearanceMode) {
        let previous = self.appearance.store(mode);
        if previous != mode {
            info!(appearance.from = %previous, appearance.to = %mode, "appearance changed");
        }
    }

    /// Flips between dark and light, returning the new mode.
    pub fn toggle_appearance(&self) -> AppearanceMode {
        let mode = self.appearance.toggle();
        info!(appearance.to = %mode, "appearance toggled");
        mode
    }

    fn read_themes(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<Theme>>> {
        self.themes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_themes(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Arc<Theme>>> {
        self.themes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_builtin_themes()
    }
}

fn validate_name(name: &str) -> Result<&str, ThemeError> {
    if name.trim().is_empty() {
        return Err(ThemeError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// A theme and appearance mode captured together.
///
/// Everything resolved through one snapshot is consistent, regardless of
/// theme switches or mode toggles happening meanwhile.
#[derive(Debug, Clone)]
pub struct ThemeSnapshot {
    active: Arc<ActiveTheme>,
    mode: AppearanceMode,
}

impl ThemeSnapshot {
    /// A snapshot of a theme that is not held by any registry.
    pub fn new(name: impl Into<String>, theme: Arc<Theme>, mode: AppearanceMode) -> Self {
        Self {
            active: Arc::new(ActiveTheme {
                name: name.into(),
                theme,
            }),
            mode,
        }
    }

    /// Registry name of the captured theme.
    pub fn name(&self) -> &str {
        &self.active.name
    }

    pub fn theme(&self) -> &Theme {
        &self.active.theme
    }

    pub fn mode(&self) -> AppearanceMode {
        self.mode
    }

    /// The same theme under the other mode.
    pub fn with_mode(&self, mode: AppearanceMode) -> Self {
        Self {
            active: Arc::clone(&self.active),
            mode,
        }
    }

    /// `role` resolved for the captured mode.
    pub fn color(&self, role: TokenRole) -> &ColorValue {
        self.active.theme.resolve(role, self.mode)
    }

    /// Resolves a color that is not part of the theme.
    pub fn resolve<'a>(&self, color: &'a AdaptiveColor) -> &'a ColorValue {
        color.resolve(self.mode)
    }
}

static GLOBAL: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::with_builtin_themes);

/// The lazily-created process-wide registry, seeded with the built-in themes.
///
/// Prefer passing a `&ThemeRegistry` to components; this accessor is for
/// bootstrap code that has no handle to pass.
pub fn global() -> &'static ThemeRegistry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{reset_appearance_detector, set_appearance_detector};
    use crate::theme::ThemeBuilder;
    use serial_test::serial;

    fn solid(name: &str, dark: &'static str, light: &'static str) -> Theme {
        Theme::from_fn(name, |_| AdaptiveColor::from_static(dark, light))
    }

    fn registry() -> ThemeRegistry {
        ThemeRegistry::new("base", solid("base", "#000000", "#ffffff")).unwrap()
    }

    #[test]
    fn test_new_selects_seed_theme() {
        let registry = registry();
        assert_eq!(registry.current_name(), "base");
        assert_eq!(registry.names(), vec!["base".to_string()]);
        assert!(!registry.is_empty());
        assert_eq!(registry.appearance(), AppearanceMode::Dark);
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = ThemeRegistry::new("  ", solid("x", "#000", "#fff")).unwrap_err();
        assert_eq!(err, ThemeError::InvalidName("  ".into()));
    }

    #[test]
    fn test_register_then_select_round_trip() {
        let registry = registry();
        let alpha = solid("alpha", "#D97757", "#D97757");
        registry.register("alpha", alpha.clone()).unwrap();
        registry.set_current("alpha").unwrap();
        assert_eq!(*registry.current(), alpha);
        assert_eq!(registry.current_name(), "alpha");
    }

    #[test]
    fn test_set_current_unknown_keeps_previous() {
        let registry = registry();
        let before = registry.current();
        let err = registry.set_current("nonexistent").unwrap_err();
        assert_eq!(
            err,
            ThemeError::UnknownTheme {
                name: "nonexistent".into(),
                available: vec!["base".into()],
            }
        );
        assert!(Arc::ptr_eq(&before, &registry.current()));
        assert_eq!(registry.current_name(), "base");
    }

    #[test]
    fn test_reregister_current_repoints_active() {
        let registry = registry();
        let replacement = solid("base v2", "#111111", "#eeeeee");
        registry.register("base", replacement.clone()).unwrap();
        assert_eq!(*registry.current(), replacement);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reregister_other_does_not_switch() {
        let registry = registry();
        registry.register("other", solid("other", "#1", "#2")).unwrap();
        registry.register("other", solid("other2", "#3", "#4")).unwrap();
        assert_eq!(registry.current_name(), "base");
        assert_eq!(registry.get("other").unwrap().name(), "other2");
    }

    #[test]
    fn test_register_incomplete_builder_leaves_registry_untouched() {
        let registry = registry();
        let alpha = solid("alpha", "#D97757", "#D97757");
        registry.register("alpha", alpha.clone()).unwrap();

        let mut without_primary = ThemeBuilder::new("alpha");
        for (role, color) in alpha.iter().skip(1) {
            without_primary = without_primary.set(role, color.clone());
        }

        let err = registry.register("alpha", without_primary).unwrap_err();
        assert_eq!(
            err,
            ThemeError::IncompleteTheme {
                name: "alpha".into(),
                missing: vec![TokenRole::Primary],
            }
        );
        assert_eq!(*registry.get("alpha").unwrap(), alpha);
    }

    #[test]
    fn test_snapshot_is_stable_across_switch() {
        let registry = registry();
        registry.register("alpha", solid("alpha", "#D97757", "#D97757")).unwrap();

        let snapshot = registry.snapshot();
        registry.set_current("alpha").unwrap();
        registry.set_appearance(AppearanceMode::Light);

        assert_eq!(snapshot.name(), "base");
        assert_eq!(snapshot.mode(), AppearanceMode::Dark);
        assert_eq!(snapshot.color(TokenRole::Primary).as_str(), "#000000");

        let fresh = registry.snapshot();
        assert_eq!(fresh.name(), "alpha");
        assert_eq!(fresh.color(TokenRole::Primary).as_str(), "#D97757");
    }

    #[test]
    fn test_appearance_change_re_resolves_without_reregistering() {
        let registry = registry();
        assert_eq!(registry.snapshot().color(TokenRole::Text).as_str(), "#000000");
        registry.set_appearance(AppearanceMode::Light);
        assert_eq!(registry.snapshot().color(TokenRole::Text).as_str(), "#ffffff");
        assert_eq!(registry.toggle_appearance(), AppearanceMode::Dark);
        assert_eq!(registry.snapshot().color(TokenRole::Text).as_str(), "#000000");
    }

    #[test]
    #[serial]
    fn test_builtin_registry() {
        set_appearance_detector(|| AppearanceMode::Light);
        let registry = ThemeRegistry::with_builtin_themes();
        reset_appearance_detector();

        assert_eq!(registry.appearance(), AppearanceMode::Light);
        assert_eq!(registry.current_name(), builtin::DEFAULT_THEME);
        assert_eq!(registry.names(), vec!["default".to_string(), "ember".to_string()]);
        registry.set_current("ember").unwrap();
        assert_eq!(registry.current().name(), "ember");
    }

    #[test]
    #[serial]
    fn test_global_is_seeded() {
        assert!(global().contains(builtin::DEFAULT_THEME));
        assert!(global().contains("ember"));
    }

    #[test]
    fn test_concurrent_switching_never_tears() {
        let registry = registry();
        registry.register("light", solid("light", "#eeeeee", "#eeeeee")).unwrap();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..500 {
                    let name = if i % 2 == 0 { "light" } else { "base" };
                    registry.set_current(name).unwrap();
                }
            });
            scope.spawn(|| {
                for _ in 0..500 {
                    registry
                        .register("base", solid("base", "#000000", "#ffffff"))
                        .unwrap();
                }
            });
            for _ in 0..2000 {
                let snapshot = registry.snapshot();
                let expected = if snapshot.name() == "light" {
                    "#eeeeee"
                } else {
                    "#000000"
                };
                for role in TokenRole::ALL {
                    assert_eq!(snapshot.color(*role).as_str(), expected);
                }
            }
        });
    }
}
