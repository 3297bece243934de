use serde::Serialize;

use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A bracketed reference `[...]`, not yet resolved.
    Bracket {
        /// Full span including `[` and `]`.
        full: Span,
        /// Span of the text between the brackets.
        inner: Span,
    },
    /// A bare URL.
    Url(Span),
}

/// What a resolved link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    LocalSymbol,
    ForeignSymbol,
    Url,
}

/// Inline content after reference resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    Link {
        text: String,
        url: String,
        kind: LinkKind,
    },
}

impl Inline {
    /// The visible text of this inline.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(t) => t,
            Inline::Link { text, .. } => text,
        }
    }
}
