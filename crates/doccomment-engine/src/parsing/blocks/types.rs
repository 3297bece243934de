use serde::Serialize;

use crate::parsing::rope::span::Span;

/// A marker note such as `BUG(amit): text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Uppercase marker word (`BUG`, `TODO`, ...).
    pub marker: String,
    /// Identifier in parentheses, usually a user name.
    pub id: String,
    /// Note text with continuation lines joined by single spaces.
    pub text: String,
}

/// One structural unit of a doc comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Node {
    Paragraph {
        /// Source lines joined with `\n`.
        text: String,
    },
    Heading {
        level: u8,
        text: String,
        /// `true` for `# Title` headings, `false` for implicit ones.
        explicit: bool,
    },
    CodeBlock {
        /// Verbatim lines with the block's shared indentation removed.
        lines: Vec<String>,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Note(Note),
    LinkDef {
        label: String,
        url: String,
    },
}

impl Node {
    /// Short kind name, used in outlines and log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Paragraph { .. } => "Paragraph",
            Node::Heading { .. } => "Heading",
            Node::CodeBlock { .. } => "CodeBlock",
            Node::List { .. } => "List",
            Node::Note(_) => "Note",
            Node::LinkDef { .. } => "LinkDef",
        }
    }
}

/// A node together with the span of the source lines it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub node: Node,
    /// Byte span from the first line's start to the last line's end.
    pub span: Span,
}
