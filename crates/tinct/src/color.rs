//! Color values and adaptive light/dark pairs.
//!
//! A [`ColorValue`] is opaque to the theme engine: themes store it, the
//! composer copies it into styles, and only the renderer interprets it.
//! [`ColorValue::to_console_color`] is that interpretation for the
//! `console` crate. It understands:
//!
//! - RGB hex: `"#d97757"`, `"#fff"` (and `"#rrggbbaa"`, alpha ignored)
//! - Functional notation: `"rgb(217, 119, 87)"`, `"rgba(0,0,0,0.5)"` (alpha ignored)
//! - 256-color palette indices: `"208"`
//! - The 8 ANSI names: `"red"`, `"cyan"`, ...
//!
//! True-color values are mapped to the nearest 256-color palette entry.
//!
//! # Example
//!
//! ```rust
//! use tinct::{AdaptiveColor, AppearanceMode};
//!
//! let heading = AdaptiveColor::new("#D97757", "#B8860B");
//! assert_eq!(heading.resolve(AppearanceMode::Dark).as_str(), "#D97757");
//! assert_eq!(heading.resolve(AppearanceMode::Light).as_str(), "#B8860B");
//! ```

use std::borrow::Cow;
use std::fmt;

use console::Color;
use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceMode;

/// An opaque, renderer-specific color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(Cow<'static, str>);

impl ColorValue {
    /// Wraps any string as a color value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    /// Wraps a static string without allocating.
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets this value as an RGB triplet, if it is in a color syntax
    /// that carries one (hex or `rgb()`/`rgba()`).
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        let s = self.0.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        parse_functional(s)
    }

    /// Interprets this value for the `console` crate.
    ///
    /// Returns `None` when the value is in no syntax this adapter knows.
    pub fn to_console_color(&self) -> Option<Color> {
        if let Some(rgb) = self.to_rgb() {
            return Some(Color::Color256(rgb_to_ansi256(rgb)));
        }
        let s = self.0.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Some(Color::Color256(index));
        }
        parse_named(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ColorValue {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

/// A color with separate dark-mode and light-mode values.
///
/// Both values are always present; resolution never falls back to an
/// undefined color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdaptiveColor {
    pub dark: ColorValue,
    pub light: ColorValue,
}

impl AdaptiveColor {
    pub fn new(dark: impl Into<ColorValue>, light: impl Into<ColorValue>) -> Self {
        Self {
            dark: dark.into(),
            light: light.into(),
        }
    }

    /// Builds a pair from static strings, usable in `const` items.
    pub const fn from_static(dark: &'static str, light: &'static str) -> Self {
        Self {
            dark: ColorValue::from_static(dark),
            light: ColorValue::from_static(light),
        }
    }

    /// The same value in both modes.
    pub fn uniform(value: impl Into<ColorValue>) -> Self {
        let value = value.into();
        Self {
            dark: value.clone(),
            light: value,
        }
    }

    /// Selects the value for `mode`. Pure and total.
    pub fn resolve(&self, mode: AppearanceMode) -> &ColorValue {
        match mode {
            AppearanceMode::Dark => &self.dark,
            AppearanceMode::Light => &self.light,
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use tinct::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    let (ri, gi, bi) = (cube_step(r), cube_step(g), cube_step(b));
    let cube = (CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_index = 16 + 36 * ri as u8 + 6 * gi as u8 + bi as u8;

    // Gray ramp 232..=255 covers 8, 18, ..., 238.
    let average = (r as u16 + g as u16 + b as u16) / 3;
    let gray_step = (average.saturating_sub(3) / 10).min(23) as u8;
    let gray = 8 + 10 * gray_step;

    if distance((r, g, b), (gray, gray, gray)) < distance((r, g, b), cube) {
        232 + gray_step
    } else {
        cube_index
    }
}

/// Channel levels of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn cube_step(channel: u8) -> usize {
    CUBE_LEVELS
        .iter()
        .enumerate()
        .min_by_key(|(_, level)| (**level as i16 - channel as i16).abs())
        .map_or(0, |(step, _)| step)
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            if hex.len() == 8 {
                u8::from_str_radix(&hex[6..8], 16).ok()?;
            }
            Some((r, g, b))
        }
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<(u8, u8, u8)> {
    let lower = s.to_ascii_lowercase();
    let (inner, arity) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, 4)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, 3)
    } else {
        return None;
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return None;
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part.parse().ok()?;
    }
    if arity == 4 {
        let alpha: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
    }
    Some((rgb[0], rgb[1], rgb[2]))
}

fn parse_named(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" | "gray" | "grey" => Color::White,
        _ => return None,
    };
    Some(color)
}
