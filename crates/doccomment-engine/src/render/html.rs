use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    notes::{NoteSections, section_title},
    parsing::{blocks::Node, inline::Inline},
};

use super::{
    Context, Printer,
    anchor::{heading_anchor, note_anchor},
};

pub struct HtmlPrinter;

impl HtmlPrinter {
    fn inlines(ctx: &mut Context<'_>, text: &str) -> String {
        Self::print(&ctx.resolve(text))
    }

    fn print(inlines: &[Inline]) -> String {
        inlines
            .iter()
            .map(|inline| match inline {
                Inline::Text(t) => encode_text(t).into_owned(),
                Inline::Link { text, url, .. } => format!(
                    "<a href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(url),
                    encode_text(text)
                ),
            })
            .collect()
    }
}

impl Printer for HtmlPrinter {
    const BLOCK_SEPARATOR: &'static str = "";

    fn block(&self, ctx: &mut Context<'_>, node: &Node) -> Option<String> {
        let html = match node {
            Node::Paragraph { text } => format!("<p>{}</p>\n", Self::inlines(ctx, text)),
            Node::Heading { level, text, .. } => {
                let n = ctx.options.output_level(*level);
                let id = ctx.anchors.unique(heading_anchor(text));
                format!(
                    "<h{n} id=\"{}\">{}</h{n}>\n",
                    encode_double_quoted_attribute(&id),
                    Self::inlines(ctx, text)
                )
            }
            Node::CodeBlock { lines } => {
                let mut html = String::from("<pre>");
                for line in lines {
                    html.push_str(&encode_text(line));
                    html.push('\n');
                }
                html.push_str("</pre>\n");
                html
            }
            Node::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                let mut html = format!("<{tag}>\n");
                for item in items {
                    html.push_str(&format!("<li>{}</li>\n", Self::inlines(ctx, item)));
                }
                html.push_str(&format!("</{tag}>\n"));
                html
            }
            Node::Note(_) | Node::LinkDef { .. } => return None,
        };
        Some(html)
    }

    fn notes(&self, ctx: &mut Context<'_>, sections: &NoteSections) -> String {
        let n = ctx.options.output_level(1);
        let mut html = String::new();
        for (marker, notes) in sections.iter() {
            html.push_str(&format!(
                "<h{n} id=\"{}\">{}</h{n}>\n<ul>\n",
                encode_double_quoted_attribute(&note_anchor(marker)),
                encode_text(&section_title(marker))
            ));
            for sourced in notes {
                html.push_str(&format!(
                    "<li><b>{}</b>: {}</li>\n",
                    encode_text(&sourced.note.id),
                    Self::print(&ctx.resolve_note(sourced))
                ));
            }
            html.push_str("</ul>\n");
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        parsing::{CommentBlock, parse_comment},
        render::{RenderOptions, render},
        symbols::SymbolTable,
    };

    fn html(text: &str, symbols: &SymbolTable) -> String {
        let doc = parse_comment(&CommentBlock::from_text(text));
        render(&doc, symbols, &RenderOptions::default()).body
    }

    #[test]
    fn paragraph_text_is_escaped() {
        assert_eq!(
            html("a < b && c > d", &SymbolTable::new()),
            "<p>a &lt; b &amp;&amp; c &gt; d</p>\n"
        );
    }

    #[test]
    fn code_is_verbatim_and_not_linked() {
        let symbols: SymbolTable = ["Name"].into_iter().collect();
        assert_eq!(
            html("Code:\n\n\tsee [Name] at http://x.org <b>\n\t\tindented", &symbols),
            "<p>Code:</p>\n<pre>see [Name] at http://x.org &lt;b&gt;\n\tindented\n</pre>\n"
        );
    }

    #[test]
    fn headings_get_unique_anchors() {
        assert_eq!(
            html("# Links\n\nText.\n\n## Links", &SymbolTable::new()),
            "<h3 id=\"hdr-Links\">Links</h3>\n<p>Text.</p>\n<h4 id=\"hdr-Links-2\">Links</h4>\n"
        );
    }

    #[test]
    fn link_attributes_are_escaped() {
        assert_eq!(
            html("[q]\n\n[q]: https://x.org/?a=1&b=\"2\"", &SymbolTable::new()),
            "<p><a href=\"https://x.org/?a=1&amp;b=&quot;2&quot;\">q</a></p>\n"
        );
    }

    #[test]
    fn ordered_lists_use_ol() {
        assert_eq!(
            html("Steps:\n  1. one\n  2. [Name]", &["Name"].into_iter().collect()),
            "<p>Steps:</p>\n<ol>\n<li>one</li>\n<li><a href=\"#Name\">Name</a></li>\n</ol>\n"
        );
    }

    #[test]
    fn notes_link_through_their_comment_definitions() {
        let doc = parse_comment(&CommentBlock::from_text(
            "Does work.\n\nBUG(amit): See [spec] and [Nope].\n\n[spec]: https://go.dev/ref/spec",
        ));
        let rendered = render(&doc, &SymbolTable::new(), &RenderOptions::default());
        assert_eq!(
            rendered.body,
            "<p>Does work.</p>\n<h3 id=\"pkg-note-BUG\">Bugs</h3>\n<ul>\n<li><b>amit</b>: See <a href=\"https://go.dev/ref/spec\">spec</a> and [Nope].</li>\n</ul>\n"
        );
        assert_eq!(rendered.warnings, vec!["[Nope]".to_string()]);
    }
}
