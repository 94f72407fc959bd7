//! What a widget is, as far as styling is concerned.
//!
//! An [`Intent`] names a widget kind and, for stateful widgets, the state
//! that changes its look:
//!
//! ```rust
//! use tinct::{InputState, Intent};
//!
//! let intent = Intent::InputBox(InputState::from_focused(true));
//! assert_eq!(intent, Intent::InputBox(InputState::Focused));
//! assert_eq!(intent.to_string(), "input-box.focused");
//! ```

use std::fmt;

/// Whether a text input holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputState {
    /// Receiving keystrokes; the border takes the accent color.
    Focused,
    Unfocused,
}

impl InputState {
    pub fn from_focused(focused: bool) -> Self {
        if focused {
            InputState::Focused
        } else {
            InputState::Unfocused
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Filled with the accent color.
    Primary,
    /// Neutral surface, for actions next to a primary one.
    Secondary,
}

/// Visual state of a list row. Selection wins over hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListItemState {
    Selected,
    Hovered,
    Normal,
}

impl ListItemState {
    /// Collapses independent selection and hover flags into one state.
    pub fn from_flags(selected: bool, hovered: bool) -> Self {
        match (selected, hovered) {
            (true, _) => ListItemState::Selected,
            (false, true) => ListItemState::Hovered,
            (false, false) => ListItemState::Normal,
        }
    }
}

/// What a widget is, for styling purposes.
///
/// Stateful widgets carry their state in the variant, so every reachable
/// combination has exactly one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    ToolCard,
    InputBox(InputState),
    Button(ButtonKind),
    Badge,
    Header,
    ListItem(ListItemState),
    CodeBlock,
    InlineCode,
    Table,
    WarningBox,
    ErrorBox,
    SuccessBox,
    ModalBackdrop,
    Shadow,
    /// Reasoning output from an assistant.
    Thinking,
    /// A conversation message body.
    Message,
}

impl Intent {
    /// Every intent, with every state of the stateful ones.
    pub const ALL: &'static [Intent] = &[
        Intent::ToolCard,
        Intent::InputBox(InputState::Focused),
        Intent::InputBox(InputState::Unfocused),
        Intent::Button(ButtonKind::Primary),
        Intent::Button(ButtonKind::Secondary),
        Intent::Badge,
        Intent::Header,
        Intent::ListItem(ListItemState::Selected),
        Intent::ListItem(ListItemState::Hovered),
        Intent::ListItem(ListItemState::Normal),
        Intent::CodeBlock,
        Intent::InlineCode,
        Intent::Table,
        Intent::WarningBox,
        Intent::ErrorBox,
        Intent::SuccessBox,
        Intent::ModalBackdrop,
        Intent::Shadow,
        Intent::Thinking,
        Intent::Message,
    ];

    pub fn all() -> &'static [Intent] {
        Self::ALL
    }

    /// Stable kebab-case name, with the state after a dot
    /// (`"input-box.focused"`).
    pub fn name(&self) -> &'static str {
        match self {
            Intent::ToolCard => "tool-card",
            Intent::InputBox(InputState::Focused) => "input-box.focused",
            Intent::InputBox(InputState::Unfocused) => "input-box.unfocused",
            Intent::Button(ButtonKind::Primary) => "button.primary",
            Intent::Button(ButtonKind::Secondary) => "button.secondary",
            Intent::Badge => "badge",
            Intent::Header => "header",
            Intent::ListItem(ListItemState::Selected) => "list-item.selected",
            Intent::ListItem(ListItemState::Hovered) => "list-item.hovered",
            Intent::ListItem(ListItemState::Normal) => "list-item.normal",
            Intent::CodeBlock => "code-block",
            Intent::InlineCode => "inline-code",
            Intent::Table => "table",
            Intent::WarningBox => "warning-box",
            Intent::ErrorBox => "error-box",
            Intent::SuccessBox => "success-box",
            Intent::ModalBackdrop => "modal-backdrop",
            Intent::Shadow => "shadow",
            Intent::Thinking => "thinking",
            Intent::Message => "message",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
