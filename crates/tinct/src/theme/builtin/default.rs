//! The default theme: warm peach accents on a neutral gray base.

use crate::color::AdaptiveColor;
use crate::theme::Theme;
use crate::token::TokenRole;

pub const NAME: &str = "default";

const PRIMARY: AdaptiveColor = AdaptiveColor::from_static("#fab283", "#3b7dd8");
const SECONDARY: AdaptiveColor = AdaptiveColor::from_static("#5c9cf5", "#7b5bb6");
const ACCENT: AdaptiveColor = AdaptiveColor::from_static("#9d7cd8", "#d68c27");
const RED: AdaptiveColor = AdaptiveColor::from_static("#e06c75", "#d1383d");
const ORANGE: AdaptiveColor = AdaptiveColor::from_static("#f5a742", "#d68c27");
const GREEN: AdaptiveColor = AdaptiveColor::from_static("#7fd88f", "#3d9a57");
const CYAN: AdaptiveColor = AdaptiveColor::from_static("#56b6c2", "#318795");
const YELLOW: AdaptiveColor = AdaptiveColor::from_static("#e5c07b", "#b0851f");
const TEXT: AdaptiveColor = AdaptiveColor::from_static("#eeeeee", "#1a1a1a");
const MUTED: AdaptiveColor = AdaptiveColor::from_static("#808080", "#8a8a8a");
const BACKGROUND: AdaptiveColor = AdaptiveColor::from_static("#212121", "#f8f8f8");
const BORDER: AdaptiveColor = AdaptiveColor::from_static("#4b4c5c", "#d3d3d3");

/// Builds the default palette.
pub fn theme() -> Theme {
    Theme::from_fn(NAME, palette)
}

fn palette(role: TokenRole) -> AdaptiveColor {
    use TokenRole::*;

    match role {
        Primary => PRIMARY,
        Secondary => SECONDARY,
        Accent => ACCENT,

        Error => RED,
        Warning => ORANGE,
        Success => GREEN,
        Info => CYAN,

        Text => TEXT,
        TextMuted => MUTED,
        TextEmphasized => YELLOW,

        Background => BACKGROUND,
        BackgroundSecondary => AdaptiveColor::from_static("#252525", "#f0f0f0"),
        BackgroundDarker => AdaptiveColor::from_static("#121212", "#ffffff"),
        BackgroundTool => AdaptiveColor::from_static("#2a2a2a", "#ececec"),

        BorderNormal => BORDER,
        BorderFocused => PRIMARY,
        BorderDim => AdaptiveColor::from_static("#303030", "#e5e5e5"),

        DiffAdded => AdaptiveColor::from_static("#478247", "#2e7d32"),
        DiffRemoved => AdaptiveColor::from_static("#7c4444", "#c62828"),
        DiffContext => AdaptiveColor::from_static("#a0a0a0", "#666666"),
        DiffHunkHeader => AdaptiveColor::from_static("#808080", "#999999"),
        DiffHighlightAdded => AdaptiveColor::from_static("#dafada", "#a5d6a7"),
        DiffHighlightRemoved => AdaptiveColor::from_static("#fadada", "#ef9a9a"),
        DiffAddedBg => AdaptiveColor::from_static("#303a30", "#e8f5e9"),
        DiffRemovedBg => AdaptiveColor::from_static("#3a3030", "#ffebee"),
        DiffContextBg => BACKGROUND,
        DiffLineNumber => AdaptiveColor::from_static("#888888", "#9e9e9e"),
        DiffAddedLineNumberBg => AdaptiveColor::from_static("#293229", "#c8e6c9"),
        DiffRemovedLineNumberBg => AdaptiveColor::from_static("#332929", "#ffcdd2"),

        MarkdownText | MarkdownCodeBlock => TEXT,
        MarkdownHeading | MarkdownListItem => SECONDARY,
        MarkdownLink | MarkdownImage => PRIMARY,
        MarkdownLinkText | MarkdownImageText => CYAN,
        MarkdownCode => GREEN,
        MarkdownBlockQuote => YELLOW,
        MarkdownEmph => YELLOW,
        MarkdownStrong => ORANGE,
        MarkdownHorizontalRule => MUTED,
        MarkdownListEnumeration => CYAN,

        SyntaxComment => MUTED,
        SyntaxKeyword => SECONDARY,
        SyntaxFunction => PRIMARY,
        SyntaxVariable => RED,
        SyntaxString => GREEN,
        SyntaxNumber => ACCENT,
        SyntaxType => YELLOW,
        SyntaxOperator => CYAN,
        SyntaxPunctuation => TEXT,
    }
}
