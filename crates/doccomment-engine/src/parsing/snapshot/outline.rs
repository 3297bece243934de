use std::fmt::Write;

use xi_rope::Rope;

use crate::parsing::{
    ParsedDoc,
    blocks::Node,
    inline::{InlineNode, parse_inline},
    inline_texts,
    rope::slice::preview,
};

/// One line per block, followed by indented lines for its inline nodes.
///
/// ```text
/// Paragraph 0..31 "See [Links] at http://go.dev."
///   text "See "
///   bracket "[Links]"
/// ```
pub fn outline(rope: &Rope, doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for b in &doc.blocks {
        let detail = match &b.node {
            Node::Paragraph { text } => format!("{text:?}"),
            Node::Heading {
                level,
                text,
                explicit,
            } => {
                let how = if *explicit { "explicit" } else { "implicit" };
                format!("h{level} {how} {text:?}")
            }
            Node::CodeBlock { lines } => {
                format!("{} lines {:?}", lines.len(), preview(rope, b.span, 30))
            }
            Node::List { ordered, items } => {
                let how = if *ordered { "ordered" } else { "unordered" };
                format!("{how} {} items", items.len())
            }
            Node::Note(note) => format!("{}({}) {:?}", note.marker, note.id, note.text),
            Node::LinkDef { label, url } => format!("{label:?} -> {url}"),
        };
        let _ = writeln!(
            out,
            "{} {}..{} {detail}",
            b.node.kind_name(),
            b.span.start,
            b.span.end
        );

        for text in inline_texts(&b.node) {
            for node in parse_inline(text) {
                let (kind, sp) = match node {
                    InlineNode::Text(sp) => ("text", sp),
                    InlineNode::Bracket { full, .. } => ("bracket", full),
                    InlineNode::Url(sp) => ("url", sp),
                };
                let _ = writeln!(out, "  {kind} {:?}", &text[sp.start..sp.end]);
            }
        }
    }
    out
}
