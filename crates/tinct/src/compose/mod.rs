//! Style composition: intent plus theme snapshot in, resolved style out.
//!
//! Widgets never pick colors. They declare an [`Intent`] and ask for a
//! [`ComposedStyle`]:
//!
//! ```rust
//! use tinct::{compose, AppearanceMode, Intent, ThemeSnapshot};
//! use tinct::theme::builtin::ember;
//! use std::sync::Arc;
//!
//! let snapshot = ThemeSnapshot::new("ember", Arc::new(ember::theme()), AppearanceMode::Dark);
//! let badge = compose(Intent::Badge, &snapshot);
//! assert_eq!(badge.background.unwrap().as_str(), "#D97757");
//! ```
//!
//! [`compose`] is pure: the same intent and snapshot always produce the
//! same style, and it touches no shared state. All colors come from the
//! snapshot's theme, resolved once for the snapshot's mode, so a style
//! never mixes two themes or two modes. The only fixed colors are
//! [`ON_PRIMARY`] (text on primary fills) and [`MODAL_BACKDROP`].
//!
//! | Intent | Background | Foreground | Padding | Border |
//! |--------|------------|------------|---------|--------|
//! | tool card | background_tool | text | 0,1 | |
//! | input box | background_secondary | text | 0,1 | rounded: primary (focused), border_normal |
//! | button | primary / background_secondary | on-primary / text | 0,2 | |
//! | badge | primary | on-primary | 0,1 | |
//! | header | background | text | 0,1 | plain, bottom only |
//! | list item | primary / background_secondary / background | on-primary / text | 0,1 | |
//! | code block | background_secondary | text | 1,2 | connection line |
//! | inline code | background_secondary | markdown_code | 0,1 | |
//! | table | | | 0 | plain |
//! | warning/error/success | background_secondary | status | 0,1 | rounded, status |
//! | modal backdrop | translucent black | | 0 | |
//! | shadow | | | 1,2 | rounded |
//! | thinking | | text_muted, italic | left 1 | dashed, border_dim |
//! | message | | text | left 1 | thick, primary |

pub mod border;
mod intent;
mod style;

pub use border::{Border, BorderGlyphs, BorderSides};
pub use intent::{ButtonKind, InputState, Intent, ListItemState};
pub use style::{ComposedStyle, Emphasis, Padding};

use crate::color::{AdaptiveColor, ColorValue};
use crate::registry::ThemeSnapshot;
use crate::token::TokenRole;

/// Text drawn on a primary-colored fill.
pub const ON_PRIMARY: AdaptiveColor = AdaptiveColor::from_static("#ffffff", "#ffffff");

/// Translucent fill behind modal dialogs.
pub const MODAL_BACKDROP: AdaptiveColor =
    AdaptiveColor::from_static("rgba(0,0,0,0.75)", "rgba(0,0,0,0.5)");

/// Composes the style for `intent` from `snapshot`.
pub fn compose(intent: Intent, snapshot: &ThemeSnapshot) -> ComposedStyle {
    let c = Colors(snapshot);
    match intent {
        Intent::ToolCard => tool_card(&c),
        Intent::InputBox(state) => input_box(&c, state),
        Intent::Button(kind) => button(&c, kind),
        Intent::Badge => badge(&c),
        Intent::Header => header(&c),
        Intent::ListItem(state) => list_item(&c, state),
        Intent::CodeBlock => code_block(&c),
        Intent::InlineCode => inline_code(&c),
        Intent::Table => table(&c),
        Intent::WarningBox => status_box(&c, TokenRole::Warning),
        Intent::ErrorBox => status_box(&c, TokenRole::Error),
        Intent::SuccessBox => status_box(&c, TokenRole::Success),
        Intent::ModalBackdrop => modal_backdrop(&c),
        Intent::Shadow => shadow(&c),
        Intent::Thinking => thinking(&c),
        Intent::Message => message(&c),
    }
}

struct Colors<'a>(&'a ThemeSnapshot);

impl Colors<'_> {
    fn role(&self, role: TokenRole) -> ColorValue {
        self.0.color(role).clone()
    }

    fn fixed(&self, color: &AdaptiveColor) -> ColorValue {
        self.0.resolve(color).clone()
    }
}

fn tool_card(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .background(c.role(TokenRole::BackgroundTool))
        .foreground(c.role(TokenRole::Text))
        .padding(Padding::symmetric(0, 1))
}

fn input_box(c: &Colors, state: InputState) -> ComposedStyle {
    let border_role = match state {
        InputState::Focused => TokenRole::Primary,
        InputState::Unfocused => TokenRole::BorderNormal,
    };
    ComposedStyle::new()
        .background(c.role(TokenRole::BackgroundSecondary))
        .foreground(c.role(TokenRole::Text))
        .padding(Padding::symmetric(0, 1))
        .border(Border::new(BorderGlyphs::ROUNDED, c.role(border_role)))
}

fn button(c: &Colors, kind: ButtonKind) -> ComposedStyle {
    let style = ComposedStyle::new().padding(Padding::symmetric(0, 2));
    match kind {
        ButtonKind::Primary => style
            .background(c.role(TokenRole::Primary))
            .foreground(c.fixed(&ON_PRIMARY))
            .bold(),
        ButtonKind::Secondary => style
            .background(c.role(TokenRole::BackgroundSecondary))
            .foreground(c.role(TokenRole::Text)),
    }
}

fn badge(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .background(c.role(TokenRole::Primary))
        .foreground(c.fixed(&ON_PRIMARY))
        .padding(Padding::symmetric(0, 1))
}

fn header(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .background(c.role(TokenRole::Background))
        .foreground(c.role(TokenRole::Text))
        .padding(Padding::symmetric(0, 1))
        .border(
            Border::new(BorderGlyphs::PLAIN, c.role(TokenRole::BorderNormal))
                .only(BorderSides::BOTTOM),
        )
}

fn list_item(c: &Colors, state: ListItemState) -> ComposedStyle {
    let style = ComposedStyle::new().padding(Padding::symmetric(0, 1));
    match state {
        ListItemState::Selected => style
            .background(c.role(TokenRole::Primary))
            .foreground(c.fixed(&ON_PRIMARY)),
        ListItemState::Hovered => style
            .background(c.role(TokenRole::BackgroundSecondary))
            .foreground(c.role(TokenRole::Text)),
        ListItemState::Normal => style
            .background(c.role(TokenRole::Background))
            .foreground(c.role(TokenRole::Text)),
    }
}

fn code_block(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .background(c.role(TokenRole::BackgroundSecondary))
        .foreground(c.role(TokenRole::Text))
        .padding(Padding::symmetric(1, 2))
        .border(Border::new(BorderGlyphs::CONNECTION_LINE, c.role(TokenRole::BorderNormal)))
}

fn inline_code(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .background(c.role(TokenRole::BackgroundSecondary))
        .foreground(c.role(TokenRole::MarkdownCode))
        .padding(Padding::symmetric(0, 1))
}

fn table(c: &Colors) -> ComposedStyle {
    ComposedStyle::new().border(Border::new(BorderGlyphs::PLAIN, c.role(TokenRole::BorderNormal)))
}

// Warning, error and success boxes differ only in the status role.
fn status_box(c: &Colors, status: TokenRole) -> ComposedStyle {
    ComposedStyle::new()
        .background(c.role(TokenRole::BackgroundSecondary))
        .foreground(c.role(status))
        .padding(Padding::symmetric(0, 1))
        .border(Border::new(BorderGlyphs::ROUNDED, c.role(status)))
}

fn modal_backdrop(c: &Colors) -> ComposedStyle {
    ComposedStyle::new().background(c.fixed(&MODAL_BACKDROP))
}

fn shadow(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .padding(Padding::symmetric(1, 2))
        .border(Border::new(BorderGlyphs::ROUNDED, c.role(TokenRole::BorderNormal)))
}

fn thinking(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .foreground(c.role(TokenRole::TextMuted))
        .padding(Padding::new(0, 0, 0, 1))
        .border(Border::new(BorderGlyphs::DASHED, c.role(TokenRole::BorderDim)))
        .italic()
}

fn message(c: &Colors) -> ComposedStyle {
    ComposedStyle::new()
        .foreground(c.role(TokenRole::Text))
        .padding(Padding::new(0, 0, 0, 1))
        .border(Border::new(BorderGlyphs::THICK, c.role(TokenRole::Primary)))
}
