//! Ember: terracotta orange on slate (dark) and ivory (light).

use crate::color::AdaptiveColor;
use crate::theme::Theme;
use crate::token::TokenRole;

pub const NAME: &str = "ember";

// Dark palette
const DARK_BACKGROUND: &str = "#141413";
const DARK_CURRENT_LINE: &str = "#1c1c1b";
const DARK_SELECTION: &str = "#2a2a28";
const DARK_FOREGROUND: &str = "#e5e5e5";
const DARK_COMMENT: &str = "#6b7280";
const DARK_PRIMARY: &str = "#D97757";
const DARK_SECONDARY: &str = "#C6613F";
const DARK_RED: &str = "#C74E39";
const DARK_ORANGE: &str = "#E1C08D";
const DARK_GREEN: &str = "#74C991";
const DARK_CYAN: &str = "#06b6d4";
const DARK_YELLOW: &str = "#E1C08D";
const DARK_BORDER: &str = "#2a2a28";

// Light palette
const LIGHT_BACKGROUND: &str = "#FAF9F5";
const LIGHT_CURRENT_LINE: &str = "#F5F4F0";
const LIGHT_SELECTION: &str = "#EBE9E4";
const LIGHT_FOREGROUND: &str = "#141413";
const LIGHT_COMMENT: &str = "#6b7280";
const LIGHT_PRIMARY: &str = "#D97757";
const LIGHT_SECONDARY: &str = "#C6613F";
const LIGHT_RED: &str = "#C74E39";
const LIGHT_ORANGE: &str = "#B8860B";
const LIGHT_GREEN: &str = "#2E7D32";
const LIGHT_CYAN: &str = "#0891b2";
const LIGHT_YELLOW: &str = "#8B7355";
const LIGHT_BORDER: &str = "#E0DED9";

const PRIMARY: AdaptiveColor = AdaptiveColor::from_static(DARK_PRIMARY, LIGHT_PRIMARY);
const SECONDARY: AdaptiveColor = AdaptiveColor::from_static(DARK_SECONDARY, LIGHT_SECONDARY);
const FOREGROUND: AdaptiveColor = AdaptiveColor::from_static(DARK_FOREGROUND, LIGHT_FOREGROUND);
const COMMENT: AdaptiveColor = AdaptiveColor::from_static(DARK_COMMENT, LIGHT_COMMENT);
const GREEN: AdaptiveColor = AdaptiveColor::from_static(DARK_GREEN, LIGHT_GREEN);
const CYAN: AdaptiveColor = AdaptiveColor::from_static(DARK_CYAN, LIGHT_CYAN);
const YELLOW: AdaptiveColor = AdaptiveColor::from_static(DARK_YELLOW, LIGHT_YELLOW);
const BORDER: AdaptiveColor = AdaptiveColor::from_static(DARK_BORDER, LIGHT_BORDER);
const BACKGROUND: AdaptiveColor = AdaptiveColor::from_static(DARK_BACKGROUND, LIGHT_BACKGROUND);

/// Builds the ember palette.
pub fn theme() -> Theme {
    Theme::from_fn(NAME, palette)
}

fn palette(role: TokenRole) -> AdaptiveColor {
    use TokenRole::*;

    match role {
        Primary | Accent => PRIMARY,
        Secondary => SECONDARY,

        Error => AdaptiveColor::from_static(DARK_RED, LIGHT_RED),
        Warning => AdaptiveColor::from_static(DARK_ORANGE, LIGHT_ORANGE),
        Success => GREEN,
        Info => CYAN,

        Text => FOREGROUND,
        TextMuted => COMMENT,
        TextEmphasized => YELLOW,

        Background => BACKGROUND,
        BackgroundSecondary => AdaptiveColor::from_static(DARK_CURRENT_LINE, LIGHT_CURRENT_LINE),
        BackgroundDarker => AdaptiveColor::from_static("#000000", "#f9fafb"),
        BackgroundTool => AdaptiveColor::from_static("#1a1a19", "#F0EFEB"),

        BorderNormal => BORDER,
        BorderFocused => PRIMARY,
        BorderDim => AdaptiveColor::from_static(DARK_SELECTION, LIGHT_SELECTION),

        DiffAdded => AdaptiveColor::from_static("#22c55e", "#16a34a"),
        DiffRemoved => AdaptiveColor::from_static("#ef4444", "#dc2626"),
        DiffContext => AdaptiveColor::from_static("#9ca3af", "#6b7280"),
        DiffHunkHeader | DiffLineNumber => AdaptiveColor::from_static("#6b7280", "#9ca3af"),
        DiffHighlightAdded => AdaptiveColor::from_static("#86efac", "#bbf7d0"),
        DiffHighlightRemoved => AdaptiveColor::from_static("#fca5a5", "#fecaca"),
        DiffAddedBg => AdaptiveColor::from_static("#14532d", "#dcfce7"),
        DiffRemovedBg => AdaptiveColor::from_static("#7f1d1d", "#fee2e2"),
        DiffContextBg => BACKGROUND,
        DiffAddedLineNumberBg => AdaptiveColor::from_static("#166534", "#bbf7d0"),
        DiffRemovedLineNumberBg => AdaptiveColor::from_static("#991b1b", "#fecaca"),

        MarkdownText | MarkdownCodeBlock => FOREGROUND,
        MarkdownHeading | MarkdownStrong | MarkdownListItem | MarkdownLink | MarkdownImage => {
            PRIMARY
        }
        MarkdownLinkText | MarkdownImageText => CYAN,
        MarkdownCode => GREEN,
        MarkdownBlockQuote => COMMENT,
        MarkdownEmph => YELLOW,
        MarkdownHorizontalRule => BORDER,
        MarkdownListEnumeration => SECONDARY,

        SyntaxComment | SyntaxPunctuation => COMMENT,
        SyntaxKeyword => AdaptiveColor::from_static("#c084fc", "#9333ea"),
        SyntaxFunction | SyntaxNumber => PRIMARY,
        SyntaxVariable => AdaptiveColor::from_static("#f472b6", "#db2777"),
        SyntaxString => GREEN,
        SyntaxType => CYAN,
        SyntaxOperator => FOREGROUND,
    }
}
