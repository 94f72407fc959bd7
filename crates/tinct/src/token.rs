//! The semantic token schema shared by every theme.
//!
//! A [`TokenRole`] names a theme-independent meaning ("error", "border
//! normal", "syntax keyword"). Every [`Theme`](crate::Theme) maps every role
//! to an [`AdaptiveColor`](crate::AdaptiveColor); there are no optional
//! roles and no inherited defaults.
//!
//! The schema is closed and versioned. Adding a role bumps
//! [`SCHEMA_VERSION`] and is a breaking change: built-in themes stop
//! compiling until they supply the new role, and runtime-built themes fail
//! with [`ThemeError::IncompleteTheme`](crate::ThemeError::IncompleteTheme).
//!
//! Role names are stable snake_case strings, used by YAML theme
//! definitions:
//!
//! ```rust
//! use tinct::TokenRole;
//!
//! assert_eq!(TokenRole::BorderNormal.name(), "border_normal");
//! assert_eq!("syntax_keyword".parse::<TokenRole>(), Ok(TokenRole::SyntaxKeyword));
//! ```

use std::fmt;
use std::str::FromStr;

/// Version of the token schema. Bumped whenever a role is added or removed.
pub const SCHEMA_VERSION: u32 = 1;

macro_rules! token_roles {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// A semantic color role. See the [module docs](self).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenRole {
            $($(#[$doc])* $variant,)+
        }

        impl TokenRole {
            /// Every role in the schema, in declaration order.
            pub const ALL: &'static [TokenRole] = &[$(TokenRole::$variant,)+];

            /// Number of roles in the schema.
            pub const COUNT: usize = Self::ALL.len();

            /// Stable snake_case name of this role.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenRole::$variant => $name,)+
                }
            }

            /// Position of this role in [`TokenRole::ALL`].
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl FromStr for TokenRole {
            type Err = UnknownRoleName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(TokenRole::$variant),)+
                    _ => Err(UnknownRoleName(s.to_string())),
                }
            }
        }
    };
}

token_roles! {
    // Brand
    /// Brand color: focus rings, badges, selected items, headings.
    Primary => "primary",
    Secondary => "secondary",
    Accent => "accent",

    // Status
    Error => "error",
    Warning => "warning",
    Success => "success",
    Info => "info",

    // Text
    /// Body text.
    Text => "text",
    TextMuted => "text_muted",
    TextEmphasized => "text_emphasized",

    // Backgrounds
    Background => "background",
    /// Raised surfaces: inputs, code blocks, hovered rows.
    BackgroundSecondary => "background_secondary",
    BackgroundDarker => "background_darker",
    /// Tool output cards.
    BackgroundTool => "background_tool",

    // Borders
    BorderNormal => "border_normal",
    BorderFocused => "border_focused",
    BorderDim => "border_dim",

    // Diff view
    DiffAdded => "diff_added",
    DiffRemoved => "diff_removed",
    DiffContext => "diff_context",
    DiffHunkHeader => "diff_hunk_header",
    DiffHighlightAdded => "diff_highlight_added",
    DiffHighlightRemoved => "diff_highlight_removed",
    DiffAddedBg => "diff_added_bg",
    DiffRemovedBg => "diff_removed_bg",
    DiffContextBg => "diff_context_bg",
    DiffLineNumber => "diff_line_number",
    DiffAddedLineNumberBg => "diff_added_line_number_bg",
    DiffRemovedLineNumberBg => "diff_removed_line_number_bg",

    // Markdown
    MarkdownText => "markdown_text",
    MarkdownHeading => "markdown_heading",
    MarkdownLink => "markdown_link",
    MarkdownLinkText => "markdown_link_text",
    MarkdownCode => "markdown_code",
    MarkdownBlockQuote => "markdown_block_quote",
    MarkdownEmph => "markdown_emph",
    MarkdownStrong => "markdown_strong",
    MarkdownHorizontalRule => "markdown_horizontal_rule",
    MarkdownListItem => "markdown_list_item",
    MarkdownListEnumeration => "markdown_list_enumeration",
    MarkdownImage => "markdown_image",
    MarkdownImageText => "markdown_image_text",
    MarkdownCodeBlock => "markdown_code_block",

    // Syntax highlighting
    SyntaxComment => "syntax_comment",
    SyntaxKeyword => "syntax_keyword",
    SyntaxFunction => "syntax_function",
    SyntaxVariable => "syntax_variable",
    SyntaxString => "syntax_string",
    SyntaxNumber => "syntax_number",
    SyntaxType => "syntax_type",
    SyntaxOperator => "syntax_operator",
    SyntaxPunctuation => "syntax_punctuation",
}

impl fmt::Display for TokenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a string that names no [`TokenRole`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token role '{0}'")]
pub struct UnknownRoleName(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_has_all_groups() {
        assert_eq!(TokenRole::COUNT, 52);
        assert_eq!(TokenRole::ALL.first(), Some(&TokenRole::Primary));
        assert_eq!(TokenRole::ALL.last(), Some(&TokenRole::SyntaxPunctuation));
    }

    #[test]
    fn test_index_matches_position() {
        for (i, role) in TokenRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i, "{} is out of place", role);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = TokenRole::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), TokenRole::COUNT);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for role in TokenRole::ALL {
            assert_eq!(role.name().parse::<TokenRole>(), Ok(*role));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "primary_hover".parse::<TokenRole>().unwrap_err();
        assert_eq!(err, UnknownRoleName("primary_hover".into()));
        assert!(err.to_string().contains("primary_hover"));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Primary".parse::<TokenRole>().is_err());
    }
}
