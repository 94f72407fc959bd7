//! Glyphs for status markers, tool kinds and message prefixes.
//!
//! Icons are structural like border glyphs: they carry no color. Pair them
//! with a [`ComposedStyle`](crate::ComposedStyle) or a token color.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Application mark.
    App,

    Check,
    Error,
    Warning,
    Info,
    Hint,
    Loading,
    Spinner,
    Document,

    Dot,
    DotEmpty,
    /// In-progress status.
    DotHalf,

    /// Streaming cursor.
    CursorBlock,
    CursorLine,

    ToolBash,
    ToolEdit,
    ToolView,
    ToolWrite,
    ToolGlob,
    ToolGrep,
    ToolFetch,
    ToolTask,
    ToolTodo,
    ToolSkill,
    ToolDiagnostics,
    /// External MCP tool.
    ToolMcp,
    ToolList,

    ChevronDown,
    ChevronRight,
    ChevronUp,

    User,
    Assistant,
    System,
}

impl Icon {
    pub const ALL: &'static [Icon] = &[
        Icon::App,
        Icon::Check,
        Icon::Error,
        Icon::Warning,
        Icon::Info,
        Icon::Hint,
        Icon::Loading,
        Icon::Spinner,
        Icon::Document,
        Icon::Dot,
        Icon::DotEmpty,
        Icon::DotHalf,
        Icon::CursorBlock,
        Icon::CursorLine,
        Icon::ToolBash,
        Icon::ToolEdit,
        Icon::ToolView,
        Icon::ToolWrite,
        Icon::ToolGlob,
        Icon::ToolGrep,
        Icon::ToolFetch,
        Icon::ToolTask,
        Icon::ToolTodo,
        Icon::ToolSkill,
        Icon::ToolDiagnostics,
        Icon::ToolMcp,
        Icon::ToolList,
        Icon::ChevronDown,
        Icon::ChevronRight,
        Icon::ChevronUp,
        Icon::User,
        Icon::Assistant,
        Icon::System,
    ];

    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::App => "⌬",
            Icon::Check => "✓",
            Icon::Error => "✖",
            Icon::Warning => "⚠",
            Icon::Info => "ℹ",
            Icon::Hint => "i",
            Icon::Loading => "⟳",
            Icon::Spinner => "...",
            Icon::Document => "🖼",
            Icon::Dot => "●",
            Icon::DotEmpty => "○",
            Icon::DotHalf => "◐",
            Icon::CursorBlock => "█",
            Icon::CursorLine => "▌",
            Icon::ToolBash => "$",
            Icon::ToolEdit => "✎",
            Icon::ToolView => "◉",
            Icon::ToolWrite => "✍",
            Icon::ToolGlob => "✱",
            Icon::ToolGrep => "⌕",
            Icon::ToolFetch => "↓",
            Icon::ToolTask | Icon::ChevronRight => "▶",
            Icon::ToolTodo => "☐",
            Icon::ToolSkill => "◆",
            Icon::ToolDiagnostics => "⚕",
            Icon::ToolMcp => "⬡",
            Icon::ToolList => "☰",
            Icon::ChevronDown => "▼",
            Icon::ChevronUp => "▲",
            Icon::User => "›",
            Icon::Assistant => "◇",
            Icon::System => "◈",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in Icon::ALL {
            assert!(!icon.glyph().is_empty(), "{:?}", icon);
        }
    }

    #[test]
    fn test_display_writes_glyph() {
        assert_eq!(Icon::Check.to_string(), "✓");
        assert_eq!(format!("{} hello", Icon::User), "› hello");
    }

    #[test]
    fn test_task_and_chevron_share_a_glyph() {
        assert_eq!(Icon::ToolTask.glyph(), Icon::ChevronRight.glyph());
    }
}
