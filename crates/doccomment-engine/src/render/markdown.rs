use crate::{
    notes::{NoteSections, section_title},
    parsing::{blocks::Node, inline::Inline},
};

use super::{
    Context, Printer,
    anchor::{heading_anchor, note_anchor},
};

pub struct MarkdownPrinter;

/// Characters escaped anywhere in Markdown text.
const SPECIAL: [char; 8] = ['\\', '`', '*', '_', '[', ']', '<', '>'];

impl MarkdownPrinter {
    fn inlines(ctx: &mut Context<'_>, text: &str) -> String {
        Self::print(ctx.resolve(text))
    }

    fn print(inlines: Vec<Inline>) -> String {
        let mut out = String::new();
        for inline in inlines {
            match inline {
                Inline::Text(t) => push_escaped(&mut out, &t),
                Inline::Link { text, url, .. } if text == url => {
                    out.push_str(&format!("<{url}>"));
                }
                Inline::Link { text, url, .. } => {
                    let mut label = String::new();
                    push_escaped(&mut label, &text);
                    out.push_str(&format!("[{label}]({url})"));
                }
            }
        }
        out
    }

    fn heading(level: u8, text: &str, anchor: &str) -> String {
        format!("{} {text} {{#{anchor}}}\n", "#".repeat(level as usize))
    }
}

/// Escapes `s` onto `out`, including markers that would start a heading or
/// list at the beginning of a line.
fn push_escaped(out: &mut String, s: &str) {
    for (i, mut line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if out.is_empty() || out.ends_with('\n') {
            if line.starts_with(['#', '-', '+']) {
                out.push('\\');
            } else {
                let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
                if digits > 0 && line[digits..].starts_with(['.', ')']) {
                    out.push_str(&line[..digits]);
                    out.push('\\');
                    line = &line[digits..];
                }
            }
        }
        for c in line.chars() {
            if SPECIAL.contains(&c) {
                out.push('\\');
            }
            out.push(c);
        }
    }
}

impl Printer for MarkdownPrinter {
    const BLOCK_SEPARATOR: &'static str = "\n";

    fn block(&self, ctx: &mut Context<'_>, node: &Node) -> Option<String> {
        let md = match node {
            Node::Paragraph { text } => format!("{}\n", Self::inlines(ctx, text)),
            Node::Heading { level, text, .. } => {
                let n = ctx.options.output_level(*level);
                let anchor = ctx.anchors.unique(heading_anchor(text));
                let text = Self::inlines(ctx, text);
                Self::heading(n, &text, &anchor)
            }
            Node::CodeBlock { lines } => lines
                .iter()
                .map(|l| {
                    if l.is_empty() {
                        "\n".to_string()
                    } else {
                        format!("    {l}\n")
                    }
                })
                .collect(),
            Node::List { ordered, items } => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}.", i + 1)
                    } else {
                        "-".to_string()
                    };
                    let pad = " ".repeat(marker.len() + 1);
                    let rendered = Self::inlines(ctx, item);
                    let mut lines = rendered.split('\n');
                    out.push_str(&format!("{marker} {}\n", lines.next().unwrap_or_default()));
                    for cont in lines {
                        out.push_str(&format!("{pad}{cont}\n"));
                    }
                }
                out
            }
            Node::Note(_) | Node::LinkDef { .. } => return None,
        };
        Some(md)
    }

    fn notes(&self, ctx: &mut Context<'_>, sections: &NoteSections) -> String {
        let n = ctx.options.output_level(1);
        let mut parts = vec![];
        for (marker, notes) in sections.iter() {
            let mut out = Self::heading(n, &section_title(marker), &note_anchor(marker));
            out.push('\n');
            for sourced in notes {
                let mut id = String::new();
                push_escaped(&mut id, &sourced.note.id);
                let text = Self::print(ctx.resolve_note(sourced));
                out.push_str(&format!("- **{id}**: {text}\n"));
            }
            parts.push(out);
        }
        parts.join("\n")
    }
}
