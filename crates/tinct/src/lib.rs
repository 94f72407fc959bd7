//! # Tinct - Adaptive Themes for Terminal UIs
//!
//! `tinct` resolves semantic color tokens against swappable themes and
//! composes ready-to-render styles for terminal widgets, in light or dark
//! appearance.
//!
//! ## Core Concepts
//!
//! - [`TokenRole`]: The closed schema of semantic color roles
//! - [`AdaptiveColor`]: A dark/light pair of [`ColorValue`]s
//! - [`Theme`]: A complete mapping from every role to an adaptive color
//! - [`ThemeRegistry`]: Named themes, the current selection and the appearance mode
//! - [`ThemeSnapshot`]: One theme plus one mode, captured for a single render
//! - [`compose`]: Turns an [`Intent`] and a snapshot into a [`ComposedStyle`]
//! - [`frame_at`]: Frame tables for spinners, blinks and progress bars
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{AppearanceMode, Intent, ThemeRegistry, TokenRole};
//!
//! let registry = ThemeRegistry::with_builtin_themes().with_appearance(AppearanceMode::Dark);
//! registry.set_current("ember").unwrap();
//!
//! let badge = registry.style_for(Intent::Badge);
//! assert_eq!(badge.background.unwrap().as_str(), "#D97757");
//!
//! let snapshot = registry.snapshot();
//! println!("{}", snapshot.color(TokenRole::Text));
//! ```
//!
//! ## Defining Themes
//!
//! Themes are complete by construction. Build one in code with
//! [`Theme::from_fn`] or [`ThemeBuilder`], or load one from YAML:
//!
//! ```rust
//! use tinct::{Theme, ThemeError};
//!
//! let err = Theme::from_yaml("colors:\n  primary: \"#D97757\"\n").unwrap_err();
//! assert!(matches!(err, ThemeError::IncompleteTheme { .. }));
//! ```
//!
//! ## Light & Dark
//!
//! The registry holds the appearance mode. It starts from
//! [`detect_appearance_mode`], which consults the `TINCT_APPEARANCE`
//! environment variable and then the OS, and changes through
//! [`ThemeRegistry::set_appearance`]. Tests replace detection with
//! [`set_appearance_detector`].
//!
//! ## Rendering
//!
//! Colors stay as strings until the edge. [`ComposedStyle::to_console_style`]
//! and [`ColorValue::to_console_color`] convert them for the `console` crate.

pub mod animation;
mod appearance;
mod color;
pub mod compose;
mod error;
pub mod icons;
mod registry;
pub mod theme;
mod token;

// Error type
pub use error::ThemeError;

// Token schema
pub use token::{TokenRole, UnknownRoleName, SCHEMA_VERSION};

// Colors
pub use color::{rgb_to_ansi256, AdaptiveColor, ColorValue};

// Appearance
pub use appearance::{
    detect_appearance_mode, reset_appearance_detector, set_appearance_detector, AppearanceCell,
    AppearanceMode, UnknownAppearanceMode, APPEARANCE_ENV,
};

// Themes
pub use theme::{builtin, IntoTheme, Theme, ThemeBuilder};

// Registry
pub use registry::{global, ThemeRegistry, ThemeSnapshot};

// Composition
pub use compose::{
    compose, Border, BorderGlyphs, BorderSides, ButtonKind, ComposedStyle, Emphasis, InputState,
    Intent, ListItemState, Padding, MODAL_BACKDROP, ON_PRIMARY,
};

// Animation and icons
pub use animation::{frame_at, progress_frame, FrameCursor, FrameKind};
pub use icons::Icon;
