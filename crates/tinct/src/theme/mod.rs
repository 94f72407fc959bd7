//! Complete, immutable palettes over the token schema.
//!
//! A [`Theme`] maps every [`TokenRole`](crate::TokenRole) to an
//! [`AdaptiveColor`](crate::AdaptiveColor). Completeness is a construction
//! invariant, not a render-time check: there is no way to resolve a role a
//! theme does not define.
//!
//! ## Construction
//!
//! Compile-time palettes use [`Theme::from_fn`] with an exhaustive match:
//!
//! ```rust
//! use tinct::{AdaptiveColor, Theme, TokenRole};
//!
//! let mono = Theme::from_fn("mono", |role| match role {
//!     TokenRole::Background => AdaptiveColor::new("#000000", "#ffffff"),
//!     _ => AdaptiveColor::new("#ffffff", "#000000"),
//! });
//! ```
//!
//! Runtime palettes go through [`ThemeBuilder`] or [`Theme::from_yaml`], both
//! of which fail with [`ThemeError::IncompleteTheme`](crate::ThemeError) when
//! a role is missing.
//!
//! ## Deriving from a base palette
//!
//! There is no inheritance. [`Theme::builder_from`] copies every color of a
//! base theme into a builder so a subset can be overridden explicitly.

pub mod builtin;
#[allow(clippy::module_inception)]
mod theme;

pub use theme::{IntoTheme, Theme, ThemeBuilder};
