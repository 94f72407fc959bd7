//! The output of composition: colors, emphasis, padding and border.
//!
//! A [`ComposedStyle`] holds resolved color strings only. It converts to a
//! `console` style at the rendering edge:
//!
//! ```rust
//! use tinct::{ColorValue, ComposedStyle};
//!
//! let style = ComposedStyle::new().foreground(ColorValue::from("#D97757")).bold();
//! assert!(style.emphasis.bold);
//! println!("{}", style.to_console_style().apply_to("ready"));
//! ```

use console::Style;

use super::border::Border;
use crate::color::ColorValue;

/// Cell padding around content, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    pub const ZERO: Padding = Padding::new(0, 0, 0, 0);

    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// `vertical` cells above and below, `horizontal` cells left and right.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
}

/// The resolved visual attributes of one widget instance.
///
/// Every color is already resolved for the appearance mode of the snapshot
/// it was composed from. A `ComposedStyle` is a plain value: changing the
/// theme or mode afterwards does not affect it, and a widget re-composes on
/// its next render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedStyle {
    pub background: Option<ColorValue>,
    pub foreground: Option<ColorValue>,
    pub padding: Padding,
    pub border: Option<Border>,
    pub emphasis: Emphasis,
}

impl ComposedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: ColorValue) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: ColorValue) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn bold(mut self) -> Self {
        self.emphasis.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.emphasis.italic = true;
        self
    }

    /// Converts colors and emphasis into a `console` style for inline text.
    ///
    /// Colors the terminal cannot express (unparseable values) are left
    /// unset rather than failing the render.
    pub fn to_console_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.foreground.as_ref().and_then(ColorValue::to_console_color) {
            style = style.fg(fg);
        }
        if let Some(bg) = self.background.as_ref().and_then(ColorValue::to_console_color) {
            style = style.bg(bg);
        }
        if self.emphasis.bold {
            style = style.bold();
        }
        if self.emphasis.italic {
            style = style.italic();
        }
        style
    }

    /// Style for the border glyphs, if there is a border.
    pub fn border_console_style(&self) -> Option<Style> {
        let border = self.border.as_ref()?;
        let mut style = Style::new();
        if let Some(fg) = border.color.to_console_color() {
            style = style.fg(fg);
        }
        Some(style)
    }

    /// Applies [`to_console_style`](Self::to_console_style) to `text`.
    pub fn paint(&self, text: &str) -> String {
        self.to_console_style().apply_to(text).to_string()
    }
}
