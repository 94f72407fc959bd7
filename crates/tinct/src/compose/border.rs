//! Named border glyph sets.
//!
//! Glyph shapes are structural, not theme-dependent. An intent picks one
//! named set and one theme color; sets are shared by value.
//!
//! | Set | Glyphs | Used by |
//! |-----|--------|---------|
//! | [`PLAIN`](BorderGlyphs::PLAIN) | `┌─┐│└┘` | header, table |
//! | [`ROUNDED`](BorderGlyphs::ROUNDED) | `╭─╮│╰╯` | input box, alert boxes, shadow |
//! | [`CONNECTION_LINE`](BorderGlyphs::CONNECTION_LINE) | `│` left | code block |
//! | [`DASHED`](BorderGlyphs::DASHED) | `┊` left | thinking |
//! | [`THICK`](BorderGlyphs::THICK) | `┃` left | message |

use crate::color::ColorValue;

pub const VERTICAL: &str = "│";
pub const VERTICAL_DASHED: &str = "┊";
pub const VERTICAL_THICK: &str = "┃";
pub const HORIZONTAL: &str = "─";

/// The glyphs of one border style. An empty string means "no glyph on
/// that edge".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderGlyphs {
    pub name: &'static str,
    pub top: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl BorderGlyphs {
    /// Square-cornered box.
    pub const PLAIN: BorderGlyphs = BorderGlyphs {
        name: "plain",
        top: HORIZONTAL,
        bottom: HORIZONTAL,
        left: VERTICAL,
        right: VERTICAL,
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
    };

    /// Round-cornered box.
    pub const ROUNDED: BorderGlyphs = BorderGlyphs {
        name: "rounded",
        top: HORIZONTAL,
        bottom: HORIZONTAL,
        left: VERTICAL,
        right: VERTICAL,
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
    };

    /// A single left rule linking consecutive blocks.
    pub const CONNECTION_LINE: BorderGlyphs = BorderGlyphs::left_rule("connection-line", VERTICAL);

    pub const DASHED: BorderGlyphs = BorderGlyphs::left_rule("dashed", VERTICAL_DASHED);

    pub const THICK: BorderGlyphs = BorderGlyphs::left_rule("thick", VERTICAL_THICK);

    /// Every named set.
    pub const NAMED: &'static [BorderGlyphs] = &[
        BorderGlyphs::PLAIN,
        BorderGlyphs::ROUNDED,
        BorderGlyphs::CONNECTION_LINE,
        BorderGlyphs::DASHED,
        BorderGlyphs::THICK,
    ];

    const fn left_rule(name: &'static str, glyph: &'static str) -> Self {
        BorderGlyphs {
            name,
            top: "",
            bottom: "",
            left: glyph,
            right: "",
            top_left: "",
            top_right: "",
            bottom_left: "",
            bottom_right: "",
        }
    }

    pub fn by_name(name: &str) -> Option<BorderGlyphs> {
        Self::NAMED.iter().copied().find(|g| g.name == name)
    }

    /// The edges this set has glyphs for.
    pub fn sides(&self) -> BorderSides {
        BorderSides {
            top: !self.top.is_empty(),
            right: !self.right.is_empty(),
            bottom: !self.bottom.is_empty(),
            left: !self.left.is_empty(),
        }
    }
}

/// Which edges of a border are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderSides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BorderSides {
    pub const ALL: BorderSides = BorderSides {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };
    pub const NONE: BorderSides = BorderSides {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };
    pub const BOTTOM: BorderSides = BorderSides {
        bottom: true,
        ..BorderSides::NONE
    };
    pub const LEFT: BorderSides = BorderSides {
        left: true,
        ..BorderSides::NONE
    };

    /// Edges drawn in both `self` and `other`.
    pub fn intersect(self, other: BorderSides) -> BorderSides {
        BorderSides {
            top: self.top && other.top,
            right: self.right && other.right,
            bottom: self.bottom && other.bottom,
            left: self.left && other.left,
        }
    }

    pub fn is_empty(self) -> bool {
        self == BorderSides::NONE
    }
}

/// A border: glyph set, drawn edges, and a resolved color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub glyphs: BorderGlyphs,
    pub sides: BorderSides,
    pub color: ColorValue,
}

impl Border {
    /// Draws every edge the glyph set has glyphs for.
    pub fn new(glyphs: BorderGlyphs, color: ColorValue) -> Self {
        Self {
            sides: glyphs.sides(),
            glyphs,
            color,
        }
    }

    /// Restricts drawing to `sides` (and only where the set has glyphs).
    pub fn only(mut self, sides: BorderSides) -> Self {
        self.sides = self.glyphs.sides().intersect(sides);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_sets_draw_all_sides() {
        assert_eq!(BorderGlyphs::PLAIN.sides(), BorderSides::ALL);
        assert_eq!(BorderGlyphs::ROUNDED.sides(), BorderSides::ALL);
    }

    #[test]
    fn test_rule_sets_draw_left_only() {
        for glyphs in [
            BorderGlyphs::CONNECTION_LINE,
            BorderGlyphs::DASHED,
            BorderGlyphs::THICK,
        ] {
            assert_eq!(glyphs.sides(), BorderSides::LEFT, "{}", glyphs.name);
        }
        assert_eq!(BorderGlyphs::DASHED.left, "┊");
        assert_eq!(BorderGlyphs::THICK.left, "┃");
    }

    #[test]
    fn test_named_sets_use_only_edge_glyphs() {
        let edges = [VERTICAL, VERTICAL_DASHED, VERTICAL_THICK, HORIZONTAL, ""];
        for glyphs in BorderGlyphs::NAMED {
            for edge in [glyphs.top, glyphs.bottom, glyphs.left, glyphs.right] {
                assert!(edges.contains(&edge), "{}: {:?}", glyphs.name, edge);
            }
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(BorderGlyphs::by_name("rounded"), Some(BorderGlyphs::ROUNDED));
        assert_eq!(BorderGlyphs::by_name("double"), None);
    }

    #[test]
    fn test_only_cannot_add_sides_without_glyphs() {
        let border =
            Border::new(BorderGlyphs::THICK, ColorValue::from("#fff")).only(BorderSides::ALL);
        assert_eq!(border.sides, BorderSides::LEFT);

        let bottom =
            Border::new(BorderGlyphs::PLAIN, ColorValue::from("#fff")).only(BorderSides::BOTTOM);
        assert_eq!(bottom.sides, BorderSides::BOTTOM);
        assert!(!bottom.sides.is_empty());
    }
}
