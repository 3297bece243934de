pub mod blocks;
pub mod comment;
pub mod inline;
pub mod rope;
pub mod snapshot;

use serde::Serialize;

use blocks::{BlockBuilder, BlockNode, CommentLineClassifier, Node, Note};
pub use comment::CommentBlock;
use inline::LinkDefs;

/// The nodes of one comment block, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.blocks.iter().map(|b| &b.node)
    }

    /// All `[label]: url` definitions of the comment.
    pub fn link_defs(&self) -> LinkDefs {
        self.nodes()
            .filter_map(|n| match n {
                Node::LinkDef { label, url } => Some((label.as_str(), url.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.nodes().filter_map(|n| match n {
            Node::Note(note) => Some(note),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses one comment block into nodes.
///
/// Never fails: malformed constructs come back as paragraph text.
pub fn parse_comment(block: &CommentBlock) -> ParsedDoc {
    let classifier = CommentLineClassifier::for_block(block);
    let mut builder = BlockBuilder::new();

    for lr in block.lines() {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// The texts of a node that take part in inline parsing.
///
/// Code blocks and link definitions have none.
pub fn inline_texts(node: &Node) -> Vec<&str> {
    match node {
        Node::Paragraph { text } | Node::Heading { text, .. } => vec![text.as_str()],
        Node::List { items, .. } => items.iter().map(String::as_str).collect(),
        Node::Note(note) => vec![note.text.as_str()],
        Node::CodeBlock { .. } | Node::LinkDef { .. } => vec![],
    }
}
