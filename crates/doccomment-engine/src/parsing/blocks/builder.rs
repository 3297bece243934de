use crate::parsing::rope::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::Indent,
    types::{BlockNode, Node, Note},
};

/// What came directly before a paragraph's first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preceded {
    Start,
    Blank,
    Block,
}

/// What closed the open block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Blank,
    End,
    Block,
}

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        span: Span,
        lines: Vec<LineClass>,
        preceded: Preceded,
    },
    Code {
        span: Span,
        lines: Vec<String>,
    },
    List {
        span: Span,
        ordered: bool,
        items: Vec<String>,
    },
    Note {
        span: Span,
        note: Note,
    },
}

/// Assembles classified lines into [`BlockNode`]s in a single pass.
///
/// A paragraph is held open until the next line arrives, which is the one
/// line of lookahead needed to decide whether a lone line is a heading.
pub struct BlockBuilder {
    leaf: LeafState,
    seen_content: bool,
    last_blank: bool,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            seen_content: false,
            last_blank: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.is_blank() {
            self.close(Terminator::Blank);
            self.last_blank = true;
            return;
        }

        if !self.extend(c) {
            self.close(Terminator::Block);
            self.open(c);
        }
        self.seen_content = true;
        self.last_blank = false;
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        self.close(Terminator::End);
        self.out
    }

    /// Continues the open block with `c`; false when `c` starts a new block.
    fn extend(&mut self, c: &LineClass) -> bool {
        match &mut self.leaf {
            LeafState::None => false,
            LeafState::Paragraph { span, lines, .. } => {
                if !c.is_plain() {
                    return false;
                }
                *span = span.cover(c.line);
                lines.push(c.clone());
                true
            }
            LeafState::Code { span, lines } => {
                if !Indent::is_indented(&c.text) {
                    return false;
                }
                *span = span.cover(c.line);
                lines.push(c.text.clone());
                true
            }
            LeafState::List {
                span,
                ordered,
                items,
            } => match &c.kind {
                LineKind::ListItem { marker, text } if marker.is_ordered() == *ordered => {
                    *span = span.cover(c.line);
                    items.push(text.clone());
                    true
                }
                LineKind::Indented => {
                    *span = span.cover(c.line);
                    if let Some(item) = items.last_mut() {
                        item.push('\n');
                        item.push_str(c.text.trim());
                    }
                    true
                }
                _ => false,
            },
            LeafState::Note { span, note } => {
                if !c.is_plain() {
                    return false;
                }
                *span = span.cover(c.line);
                if !note.text.is_empty() {
                    note.text.push(' ');
                }
                note.text.push_str(c.text.trim());
                true
            }
        }
    }

    fn open(&mut self, c: &LineClass) {
        self.leaf = match &c.kind {
            LineKind::Indented => LeafState::Code {
                span: c.line,
                lines: vec![c.text.clone()],
            },
            LineKind::ListItem { marker, text } => LeafState::List {
                span: c.line,
                ordered: marker.is_ordered(),
                items: vec![text.clone()],
            },
            LineKind::NoteStart(note) => LeafState::Note {
                span: c.line,
                note: note.clone(),
            },
            LineKind::Text | LineKind::Heading { .. } | LineKind::LinkDef { .. } | LineKind::Blank => {
                LeafState::Paragraph {
                    span: c.line,
                    lines: vec![c.clone()],
                    preceded: self.preceded(),
                }
            }
        };
    }

    fn preceded(&self) -> Preceded {
        if !self.seen_content {
            Preceded::Start
        } else if self.last_blank {
            Preceded::Blank
        } else {
            Preceded::Block
        }
    }

    fn close(&mut self, term: Terminator) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph {
                span,
                lines,
                preceded,
            } => self.flush_paragraph(span, lines, preceded, term),
            LeafState::Code { span, lines } => {
                let indent = Indent::common_prefix(lines.iter().map(String::as_str));
                let lines = lines
                    .iter()
                    .map(|l| l.strip_prefix(indent.as_str()).unwrap_or(l).to_string())
                    .collect();
                self.emit(Node::CodeBlock { lines }, span);
            }
            LeafState::List {
                span,
                ordered,
                items,
            } => self.emit(Node::List { ordered, items }, span),
            LeafState::Note { span, note } => self.emit(Node::Note(note), span),
        }
    }

    fn flush_paragraph(
        &mut self,
        span: Span,
        lines: Vec<LineClass>,
        preceded: Preceded,
        term: Terminator,
    ) {
        let all_defs = lines
            .iter()
            .all(|l| matches!(l.kind, LineKind::LinkDef { .. }));
        if all_defs && preceded == Preceded::Block {
            log::debug!("link definitions directly after a block; kept as paragraph text");
        } else if all_defs {
            for l in lines {
                if let LineKind::LinkDef { label, url } = l.kind {
                    self.emit(Node::LinkDef { label, url }, l.line);
                }
            }
            return;
        }

        if let [line] = lines.as_slice()
            && let LineKind::Heading {
                level,
                text,
                explicit,
            } = &line.kind
        {
            let isolated = if *explicit {
                matches!(preceded, Preceded::Start | Preceded::Blank)
                    && matches!(term, Terminator::Blank | Terminator::End)
            } else {
                preceded == Preceded::Blank && term == Terminator::Blank
            };
            if isolated {
                self.emit(
                    Node::Heading {
                        level: *level,
                        text: text.clone(),
                        explicit: *explicit,
                    },
                    span,
                );
                return;
            }
            log::debug!("heading candidate {text:?} is not blank-isolated; kept as paragraph text");
        }

        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(Node::Paragraph { text }, span);
    }

    fn emit(&mut self, node: Node, span: Span) {
        self.out.push(BlockNode { node, span });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
