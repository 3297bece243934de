use crate::parsing::{
    comment::CommentBlock,
    rope::{lines::LineRef, span::Span},
};

use super::{
    kinds::{Heading, Indent, LinkDef, List, ListMarker, NoteMarker},
    types::Note,
};

/// What a single line could be, judged without looking at its neighbours.
///
/// Heading and link definition variants are candidates only: the block
/// builder decides whether the surrounding blank lines promote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Text,
    Heading {
        level: u8,
        text: String,
        explicit: bool,
    },
    LinkDef {
        label: String,
        url: String,
    },
    NoteStart(Note),
    ListItem {
        marker: ListMarker,
        text: String,
    },
    /// Extra indentation relative to the block; code or list continuation.
    Indented,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text with the block's base indentation and trailing whitespace removed.
    pub text: String,
    pub kind: LineKind,
}

impl LineClass {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Unindented prose: text, or a heading/link definition candidate.
    pub fn is_plain(&self) -> bool {
        matches!(
            self.kind,
            LineKind::Text | LineKind::Heading { .. } | LineKind::LinkDef { .. }
        )
    }
}

/// Classifies comment lines relative to the block's base indentation.
pub struct CommentLineClassifier {
    base_indent: String,
}

impl CommentLineClassifier {
    pub fn new(base_indent: impl Into<String>) -> Self {
        Self {
            base_indent: base_indent.into(),
        }
    }

    /// A classifier whose base indentation is the whitespace prefix shared by
    /// every non-blank line of `block`.
    pub fn for_block(block: &CommentBlock) -> Self {
        let lines: Vec<LineRef> = block.lines().collect();
        Self::new(Indent::common_prefix(lines.iter().map(LineRef::trimmed)))
    }

    pub fn base_indent(&self) -> &str {
        &self.base_indent
    }

    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.trimmed();
        if trimmed.trim_start().is_empty() {
            return LineClass {
                line: lr.span,
                text: String::new(),
                kind: LineKind::Blank,
            };
        }

        let text = trimmed
            .strip_prefix(self.base_indent.as_str())
            .unwrap_or(trimmed);

        LineClass {
            line: lr.span,
            text: text.to_string(),
            kind: Self::kind_of(text),
        }
    }

    fn kind_of(text: &str) -> LineKind {
        if Indent::is_indented(text) {
            return match List::marker(text.trim_start()) {
                Some((marker, item)) => LineKind::ListItem {
                    marker,
                    text: item.to_string(),
                },
                None => LineKind::Indented,
            };
        }

        if let Some(note) = NoteMarker::parse(text) {
            return LineKind::NoteStart(note);
        }
        if let Some((label, url)) = LinkDef::parse(text) {
            return LineKind::LinkDef { label, url };
        }
        if let Some((level, heading)) = Heading::explicit(text) {
            return LineKind::Heading {
                level,
                text: heading.to_string(),
                explicit: true,
            };
        }
        if Heading::implicit(text) {
            return LineKind::Heading {
                level: 1,
                text: text.to_string(),
                explicit: false,
            };
        }
        LineKind::Text
    }
}
