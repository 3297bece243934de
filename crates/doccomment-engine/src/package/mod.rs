//! # Package model
//!
//! Declarations of one package with their comments, associated the way a
//! documentation page lists them: methods, constructors and typed values
//! under their type, examples under their target.
//!
//! Every comment is parsed independently; [`render_package`] renders them
//! all and gathers the notes of the whole package into one section.

pub mod builder;
pub mod decl;
pub mod examples;

use std::collections::BTreeMap;

use crate::{
    notes::{NoteSections, SourcedNote},
    parsing::{CommentBlock, ParsedDoc, parse_comment},
    render::{RenderOptions, render_body, render_notes},
    symbols::SymbolTable,
};

pub use builder::PackageBuilder;
pub use decl::{DeclKind, Declaration};
pub use examples::{Example, ExampleOutput, ExampleTarget};

pub use crate::render::UnresolvedRef;

/// A type with the declarations listed under it.
#[derive(Debug, Clone)]
pub struct TypeDoc {
    pub decl: Declaration,
    pub values: Vec<Declaration>,
    pub constructors: Vec<Declaration>,
    pub methods: Vec<Declaration>,
}

impl TypeDoc {
    fn new(decl: Declaration) -> Self {
        Self {
            decl,
            values: vec![],
            constructors: vec![],
            methods: vec![],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub doc: CommentBlock,
    pub types: Vec<TypeDoc>,
    /// Functions that construct no local type, and methods whose receiver
    /// is not declared.
    pub funcs: Vec<Declaration>,
    /// Constants and variables not typed with a local type.
    pub values: Vec<Declaration>,
    /// Package-level examples.
    pub examples: Vec<Example>,
    symbol_examples: BTreeMap<String, Vec<Example>>,
    pub floating: Vec<CommentBlock>,
    symbols: SymbolTable,
}

/// Parsed comments of a package, by declaration id.
#[derive(Debug, Clone, Default)]
pub struct ParsedPackage {
    pub doc: ParsedDoc,
    pub declarations: BTreeMap<String, ParsedDoc>,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedPackage {
    pub doc: String,
    pub declarations: BTreeMap<String, String>,
    /// Example comments, by example name.
    pub examples: BTreeMap<String, String>,
    /// The package notes section; empty when no allowed notes exist.
    pub notes: String,
    pub warnings: Vec<UnresolvedRef>,
}

impl Package {
    pub fn type_doc(&self, name: &str) -> Option<&TypeDoc> {
        self.types.iter().find(|t| t.decl.name == name)
    }

    /// Examples attached to a declaration id (`T`, `F` or `T.M`).
    pub fn examples_for(&self, id: &str) -> &[Example] {
        self.symbol_examples
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Every declaration in listing order: each type followed by its
    /// values, constructors and methods, then functions, then values.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.types
            .iter()
            .flat_map(|t| {
                std::iter::once(&t.decl)
                    .chain(&t.values)
                    .chain(&t.constructors)
                    .chain(&t.methods)
            })
            .chain(&self.funcs)
            .chain(&self.values)
    }

    pub fn parse_all(&self) -> ParsedPackage {
        ParsedPackage {
            doc: parse_comment(&self.doc),
            declarations: self
                .declarations()
                .map(|d| (d.id(), parse_comment(&d.comment)))
                .collect(),
        }
    }

    /// Notes of every marker from the package comment, the declarations
    /// and the floating comments, in that order. Each note keeps the link
    /// definitions of its own comment; package-level notes are located at
    /// the package name.
    pub fn notes(&self) -> NoteSections {
        let comments = std::iter::once((self.name.clone(), &self.doc))
            .chain(self.declarations().map(|d| (d.id(), &d.comment)))
            .chain(self.floating.iter().map(|c| (self.name.clone(), c)));
        NoteSections::all(comments.flat_map(|(location, comment)| {
            SourcedNote::from_doc(&parse_comment(comment), Some(location.as_str()))
        }))
    }
}

/// Renders every comment of the package, without per-comment notes, plus
/// one notes section for the package.
pub fn render_package(package: &Package, options: &RenderOptions) -> RenderedPackage {
    let symbols = package.symbols();
    let mut out = RenderedPackage::default();

    let mut render_one = |location: &str, comment: &CommentBlock| -> String {
        let rendered = render_body(&parse_comment(comment), symbols, options);
        for reference in rendered.warnings {
            log::warn!("{location}: unresolved doc link {reference}");
            out.warnings.push(UnresolvedRef {
                location: location.to_string(),
                reference,
            });
        }
        rendered.body
    };

    let doc = render_one(&package.name, &package.doc);
    let declarations: BTreeMap<_, _> = package
        .declarations()
        .map(|d| {
            let id = d.id();
            let body = render_one(&id, &d.comment);
            (id, body)
        })
        .collect();
    let examples: BTreeMap<_, _> = package
        .examples
        .iter()
        .chain(package.symbol_examples.values().flatten())
        .map(|e| (e.name.clone(), render_one(&e.name, &e.comment)))
        .collect();

    out.doc = doc;
    out.declarations = declarations;
    out.examples = examples;

    let notes = render_notes(&package.notes(), symbols, options);
    for unresolved in notes.located_warnings {
        log::warn!(
            "{}: unresolved doc link {} in note",
            unresolved.location,
            unresolved.reference
        );
        out.warnings.push(unresolved);
    }
    out.notes = notes.body;
    out
}
