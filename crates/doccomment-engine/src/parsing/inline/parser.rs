use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Bracket, Url},
    types::InlineNode,
};

/// Parses text into a sequence of [`InlineNode`]s.
///
/// Brackets are tried before URLs, so a URL written inside brackets stays
/// part of the bracketed text. The returned nodes cover the whole input;
/// text between constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = try_parse_bracket(&mut cur).or_else(|| try_parse_url(&mut cur));
        if let Some(node) = node {
            let sp = span_of(&node);
            flush_text(&mut out, text_start, sp.start);
            text_start = sp.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn span_of(n: &InlineNode) -> Span {
    match n {
        InlineNode::Text(sp) => *sp,
        InlineNode::Bracket { full, .. } => *full,
        InlineNode::Url(sp) => *sp,
    }
}

/// Attempts to parse `[...]` at the current position.
///
/// The brackets must be non-empty, unnested, and not glued to a letter or
/// digit on either side. On failure the cursor is restored.
fn try_parse_bracket(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Bracket::OPEN) || !Bracket::is_boundary(cur.prev()) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let inner_start = cur.pos();

    while let Some(c) = cur.peek() {
        if c == Bracket::CLOSE || c == Bracket::OPEN {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(Bracket::CLOSE) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    if !Bracket::is_boundary(cur.peek()) {
        *cur = saved;
        return None;
    }

    Some(InlineNode::Bracket {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

fn try_parse_url(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !Bracket::is_boundary(cur.prev()) {
        return None;
    }
    let len = Url::match_len(cur.rest())?;
    let start = cur.pos();
    cur.bump_n(len);
    Some(InlineNode::Url(Span {
        start,
        end: cur.pos(),
    }))
}
