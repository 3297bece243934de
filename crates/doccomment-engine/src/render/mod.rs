//! # Rendering
//!
//! Serializes a [`ParsedDoc`] into one of the supported output formats.
//!
//! Each format is a [`Printer`]; [`render`] drives it over the nodes, keeps
//! the inline resolution state in a shared [`Context`], and appends the notes
//! section for the markers allowed by [`RenderOptions`].

pub mod anchor;
pub mod html;
pub mod markdown;
pub mod text;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    notes::{NoteSections, SourcedNote},
    parsing::{
        ParsedDoc,
        blocks::Node,
        inline::{Inline, LinkDefs, resolve_inline},
    },
    symbols::SymbolTable,
};

use anchor::AnchorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    #[serde(alias = "text")]
    Plaintext,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Markers whose notes are rendered. Other notes are parsed but dropped.
    pub allowed_note_markers: BTreeSet<String>,
    /// Output level of a level-1 comment heading (`3` renders `<h3>`).
    pub heading_level: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            allowed_note_markers: BTreeSet::from([Self::DEFAULT_NOTE_MARKER.to_string()]),
            heading_level: 3,
        }
    }
}

impl RenderOptions {
    pub const DEFAULT_NOTE_MARKER: &'static str = "BUG";

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_note_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_note_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Output level for a comment heading of `level`, clamped to 1..=6.
    pub fn output_level(&self, level: u8) -> u8 {
        self.heading_level
            .saturating_add(level.saturating_sub(1))
            .clamp(1, 6)
    }
}

/// A reference that could not be resolved, with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRef {
    /// Declaration id, or the package name for package-level comments.
    pub location: String,
    pub reference: String,
}

/// Rendered markup plus the references that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    /// Unresolved doc-link references, as written (`[Unknown.Symbol]`).
    pub warnings: Vec<String>,
    /// Unresolved references in notes that know their source comment.
    pub located_warnings: Vec<UnresolvedRef>,
}

/// State shared by the printers while rendering one document.
pub struct Context<'a> {
    defs: LinkDefs,
    symbols: &'a SymbolTable,
    pub options: &'a RenderOptions,
    pub anchors: AnchorSet,
    used_defs: Vec<String>,
    warnings: Vec<String>,
    located_warnings: Vec<UnresolvedRef>,
}

impl<'a> Context<'a> {
    pub fn new(defs: LinkDefs, symbols: &'a SymbolTable, options: &'a RenderOptions) -> Self {
        Self {
            defs,
            symbols,
            options,
            anchors: AnchorSet::default(),
            used_defs: vec![],
            warnings: vec![],
            located_warnings: vec![],
        }
    }

    /// Resolves the references in `text`, remembering used link
    /// definitions and unresolved references.
    pub fn resolve(&mut self, text: &str) -> Vec<Inline> {
        let resolved = resolve_inline(text, &self.defs, self.symbols);
        for label in resolved.used_defs {
            if !self.used_defs.contains(&label) {
                self.used_defs.push(label);
            }
        }
        self.warnings.extend(resolved.unresolved);
        resolved.inlines
    }

    /// Resolves a note's text against the definitions of the comment it
    /// came from. Its definitions are not listed in this document's footer.
    pub fn resolve_note(&mut self, sourced: &SourcedNote) -> Vec<Inline> {
        let resolved = resolve_inline(&sourced.note.text, &sourced.defs, self.symbols);
        if let Some(location) = &sourced.location {
            self.located_warnings
                .extend(resolved.unresolved.iter().map(|reference| UnresolvedRef {
                    location: location.clone(),
                    reference: reference.clone(),
                }));
        }
        self.warnings.extend(resolved.unresolved);
        resolved.inlines
    }

    /// Link definitions referenced so far, as `(label, url)`.
    pub fn used_defs(&self) -> Vec<(&str, &str)> {
        self.used_defs
            .iter()
            .filter_map(|label| Some((label.as_str(), self.defs.get(label)?)))
            .collect()
    }
}

/// One output format.
pub trait Printer {
    /// Placed between rendered blocks.
    const BLOCK_SEPARATOR: &'static str;

    /// Renders a body node. Notes and link definitions usually render as `None`.
    fn block(&self, ctx: &mut Context<'_>, node: &Node) -> Option<String>;

    /// Renders the notes section; only called with non-empty sections.
    fn notes(&self, ctx: &mut Context<'_>, sections: &NoteSections) -> String;

    /// Trailing material after the body, before the notes.
    fn footer(&self, _ctx: &mut Context<'_>) -> Option<String> {
        None
    }
}

/// Renders a comment including its notes section.
pub fn render(doc: &ParsedDoc, symbols: &SymbolTable, options: &RenderOptions) -> Rendered {
    let sections = NoteSections::collect(
        SourcedNote::from_doc(doc, None),
        &options.allowed_note_markers,
    );
    dispatch(doc, Some(&sections), symbols, options)
}

/// Renders a comment without its notes, for callers that gather notes
/// across many comments.
pub fn render_body(doc: &ParsedDoc, symbols: &SymbolTable, options: &RenderOptions) -> Rendered {
    dispatch(doc, None, symbols, options)
}

/// Renders a notes section on its own, filtered by the allowed markers.
pub fn render_notes(
    sections: &NoteSections,
    symbols: &SymbolTable,
    options: &RenderOptions,
) -> Rendered {
    let sections = sections.filtered(&options.allowed_note_markers);
    dispatch(&ParsedDoc::default(), Some(&sections), symbols, options)
}

fn dispatch(
    doc: &ParsedDoc,
    sections: Option<&NoteSections>,
    symbols: &SymbolTable,
    options: &RenderOptions,
) -> Rendered {
    match options.format {
        OutputFormat::Html => print(&html::HtmlPrinter, doc, sections, symbols, options),
        OutputFormat::Plaintext => print(&text::TextPrinter, doc, sections, symbols, options),
        OutputFormat::Markdown => {
            print(&markdown::MarkdownPrinter, doc, sections, symbols, options)
        }
    }
}

fn print<P: Printer>(
    printer: &P,
    doc: &ParsedDoc,
    sections: Option<&NoteSections>,
    symbols: &SymbolTable,
    options: &RenderOptions,
) -> Rendered {
    let mut ctx = Context::new(doc.link_defs(), symbols, options);

    let mut parts: Vec<String> = doc
        .nodes()
        .filter_map(|node| printer.block(&mut ctx, node))
        .collect();

    parts.extend(printer.footer(&mut ctx));

    if let Some(sections) = sections.filter(|s| !s.is_empty()) {
        parts.push(printer.notes(&mut ctx, sections));
    }

    Rendered {
        body: parts.join(P::BLOCK_SEPARATOR),
        warnings: ctx.warnings,
        located_warnings: ctx.located_warnings,
    }
}
