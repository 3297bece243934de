use crate::{
    notes::{NoteSections, section_title},
    parsing::{blocks::Node, inline::Inline},
};

use super::{Context, Printer};

/// Plain text output, close to how the comment reads in source.
pub struct TextPrinter;

impl TextPrinter {
    fn inlines(ctx: &mut Context<'_>, text: &str) -> String {
        Self::print(&ctx.resolve(text))
    }

    fn print(inlines: &[Inline]) -> String {
        inlines.iter().map(Inline::text).collect()
    }
}

impl Printer for TextPrinter {
    const BLOCK_SEPARATOR: &'static str = "\n";

    fn block(&self, ctx: &mut Context<'_>, node: &Node) -> Option<String> {
        let text = match node {
            Node::Paragraph { text } => format!("{}\n", Self::inlines(ctx, text)),
            Node::Heading { text, .. } => format!("# {}\n", Self::inlines(ctx, text)),
            Node::CodeBlock { lines } => lines
                .iter()
                .map(|l| {
                    if l.is_empty() {
                        "\n".to_string()
                    } else {
                        format!("\t{l}\n")
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
                    let rendered = Self::inlines(ctx, item);
                    let mut lines = rendered.split('\n');
                    out.push_str(&format!("  {marker} {}\n", lines.next().unwrap_or_default()));
                    for cont in lines {
                        out.push_str(&format!("    {cont}\n"));
                    }
                }
                out
            }
            Node::Note(_) | Node::LinkDef { .. } => return None,
        };
        Some(text)
    }

    fn footer(&self, ctx: &mut Context<'_>) -> Option<String> {
        let defs = ctx.used_defs();
        if defs.is_empty() {
            return None;
        }
        Some(
            defs.into_iter()
                .map(|(label, url)| format!("[{label}]: {url}\n"))
                .collect(),
        )
    }

    fn notes(&self, ctx: &mut Context<'_>, sections: &NoteSections) -> String {
        let mut parts = vec![];
        for (marker, notes) in sections.iter() {
            let mut out = format!("{}\n\n", section_title(marker));
            for sourced in notes {
                let text = Self::print(&ctx.resolve_note(sourced));
                out.push_str(&format!("  {}: {text}\n", sourced.note.id));
            }
            parts.push(out);
        }
        parts.join("\n")
    }
}
