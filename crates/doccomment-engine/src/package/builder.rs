use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::{DocError, Result},
    parsing::CommentBlock,
    symbols::{ForeignIndex, SymbolTable},
};

use super::{
    Package, TypeDoc,
    decl::{DeclKind, Declaration},
    examples::{Example, ExampleTarget},
};

/// Collects the documented parts of one package and associates them.
#[derive(Debug, Default)]
pub struct PackageBuilder {
    name: String,
    doc: CommentBlock,
    decls: Vec<Declaration>,
    ids: BTreeSet<String>,
    examples: Vec<Example>,
    floating: Vec<CommentBlock>,
    foreign: ForeignIndex,
}

impl PackageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the package comment.
    pub fn doc(&mut self, comment: CommentBlock) -> &mut Self {
        self.doc = comment;
        self
    }

    pub fn add(&mut self, decl: Declaration) -> Result<&mut Self> {
        let id = decl.id();
        if !self.ids.insert(id.clone()) {
            return Err(DocError::DuplicateDeclaration(id));
        }
        self.decls.push(decl);
        Ok(self)
    }

    pub fn add_example(&mut self, example: Example) -> Result<&mut Self> {
        if self.examples.iter().any(|e| e.name == example.name) {
            return Err(DocError::DuplicateExample(example.name));
        }
        self.examples.push(example);
        Ok(self)
    }

    /// A comment attached to no declaration. Only its notes are used.
    pub fn add_floating_comment(&mut self, comment: CommentBlock) -> &mut Self {
        self.floating.push(comment);
        self
    }

    pub fn foreign(&mut self, index: ForeignIndex) -> &mut Self {
        self.foreign = index;
        self
    }

    pub fn build(self) -> Package {
        let type_names: BTreeSet<String> = self
            .decls
            .iter()
            .filter(|d| d.kind == DeclKind::Type)
            .map(|d| d.name.clone())
            .collect();
        let constructors = ConstructorTable::new(&self.decls, &type_names);

        let mut symbols = SymbolTable::with_foreign(self.foreign);
        for id in &self.ids {
            symbols.add_local(id.clone());
        }

        let mut types: Vec<TypeDoc> = vec![];
        let mut type_index = BTreeMap::<String, usize>::new();
        for decl in self.decls.iter().filter(|d| d.kind == DeclKind::Type) {
            type_index.insert(decl.name.clone(), types.len());
            types.push(TypeDoc::new(decl.clone()));
        }

        let mut funcs = vec![];
        let mut values = vec![];
        for decl in self.decls {
            match &decl.kind {
                DeclKind::Type => {}
                DeclKind::Method { receiver, .. } => match type_index.get(receiver) {
                    Some(&i) => types[i].methods.push(decl),
                    None => {
                        log::warn!(
                            "method {} has unknown receiver {receiver}; listed as a function",
                            decl.name
                        );
                        funcs.push(decl);
                    }
                },
                DeclKind::Func { .. } => match constructors.type_for(&decl.name) {
                    Some(ty) => types[type_index[ty]].constructors.push(decl),
                    None => funcs.push(decl),
                },
                DeclKind::Value { type_name, .. } => {
                    match type_name.as_ref().and_then(|t| type_index.get(t)) {
                        Some(&i) => types[i].values.push(decl),
                        None => values.push(decl),
                    }
                }
            }
        }

        let mut examples = vec![];
        let mut symbol_examples = BTreeMap::<String, Vec<Example>>::new();
        for example in self.examples {
            match example.target() {
                Some(ExampleTarget::Package) => examples.push(example),
                Some(ExampleTarget::Symbol(id)) if self.ids.contains(&id) => {
                    symbol_examples.entry(id).or_default().push(example);
                }
                Some(ExampleTarget::Symbol(id)) => {
                    log::warn!("example {} refers to unknown symbol {id}", example.name);
                }
                None => log::warn!("{} is not a valid example name", example.name),
            }
        }

        Package {
            name: self.name,
            doc: self.doc,
            types,
            funcs,
            values,
            examples,
            symbol_examples,
            floating: self.floating,
            symbols,
        }
    }
}

/// Function name to the single local type it constructs.
struct ConstructorTable(BTreeMap<String, String>);

impl ConstructorTable {
    fn new(decls: &[Declaration], types: &BTreeSet<String>) -> Self {
        let mut table = BTreeMap::new();
        for decl in decls {
            let DeclKind::Func { results } = &decl.kind else {
                continue;
            };
            let named: BTreeSet<&str> = results
                .iter()
                .map(|r| base_type(r))
                .filter(|t| *t != "error" && types.contains(*t))
                .collect();
            if named.len() == 1
                && let Some(only) = named.first()
            {
                table.insert(decl.name.clone(), only.to_string());
            }
        }
        Self(table)
    }

    fn type_for(&self, func: &str) -> Option<&str> {
        self.0.get(func).map(String::as_str)
    }
}

/// `*T`, `[]T` and `[]*T` all name `T`.
fn base_type(result: &str) -> &str {
    let mut t = result.trim();
    loop {
        if let Some(rest) = t.strip_prefix('*') {
            t = rest;
        } else if let Some(rest) = t.strip_prefix("[]") {
            t = rest;
        } else {
            return t;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn c() -> CommentBlock {
        CommentBlock::default()
    }

    #[rstest]
    #[case("*Client", "Client")]
    #[case("[]*Client", "Client")]
    #[case("error", "error")]
    #[case("map[string]Client", "map[string]Client")]
    fn base_types(#[case] result: &str, #[case] expected: &str) {
        assert_eq!(base_type(result), expected);
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut b = PackageBuilder::new("p");
        b.add(Declaration::type_decl("T", c())).unwrap();
        assert_eq!(
            b.add(Declaration::func("T", Vec::<String>::new(), c())).unwrap_err(),
            DocError::DuplicateDeclaration("T".into())
        );
        b.add(Declaration::method("T", "String", c())).unwrap();
        assert_eq!(
            b.add(Declaration::method("*T", "String", c())).unwrap_err(),
            DocError::DuplicateDeclaration("T.String".into())
        );
        b.add_example(Example::new("ExampleT", c(), "")).unwrap();
        assert_eq!(
            b.add_example(Example::new("ExampleT", c(), "")).unwrap_err(),
            DocError::DuplicateExample("ExampleT".into())
        );
    }

    #[test]
    fn associates_members_with_their_type() {
        let mut b = PackageBuilder::new("p");
        b.add(Declaration::method("*Client", "Do", c())).unwrap();
        b.add(Declaration::type_decl("Client", c())).unwrap();
        b.add(Declaration::type_decl("Option", c())).unwrap();
        b.add(Declaration::func("NewClient", ["*Client", "error"], c())).unwrap();
        b.add(Declaration::func("Pair", ["*Client", "Option"], c())).unwrap();
        b.add(Declaration::func("Version", ["string"], c())).unwrap();
        b.add(Declaration::constant("Default", Some("Option"), c())).unwrap();
        b.add(Declaration::variable("Verbose", Some("bool"), c())).unwrap();
        b.add(Declaration::method("Ghost", "Boo", c())).unwrap();
        let pkg = b.build();

        let client = pkg.type_doc("Client").unwrap();
        assert_eq!(names(&client.methods), vec!["Do"]);
        assert_eq!(names(&client.constructors), vec!["NewClient"]);
        assert_eq!(names(&pkg.type_doc("Option").unwrap().values), vec!["Default"]);
        assert_eq!(names(&pkg.funcs), vec!["Pair", "Version", "Boo"]);
        assert_eq!(names(&pkg.values), vec!["Verbose"]);
    }

    #[test]
    fn examples_attach_by_name() {
        let mut b = PackageBuilder::new("p");
        b.add(Declaration::type_decl("Examples", c())).unwrap();
        for name in [
            "Example",
            "Example_other",
            "ExampleExamples",
            "ExampleExamples_other",
            "ExampleMissing",
        ] {
            b.add_example(Example::new(name, c(), "")).unwrap();
        }
        let pkg = b.build();

        let package: Vec<_> = pkg.examples.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(package, vec!["Example", "Example_other"]);
        let typed: Vec<_> = pkg
            .examples_for("Examples")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(typed, vec!["ExampleExamples", "ExampleExamples_other"]);
        assert!(pkg.examples_for("Missing").is_empty());
    }

    #[test]
    fn symbols_cover_every_declaration() {
        let mut b = PackageBuilder::new("p");
        b.add(Declaration::type_decl("T", c())).unwrap();
        b.add(Declaration::method("T", "M", c())).unwrap();
        b.add(Declaration::func("F", Vec::<String>::new(), c())).unwrap();
        let pkg = b.build();
        assert_eq!(pkg.symbols().local("T.M"), Some("#T.M"));
        assert_eq!(pkg.symbols().local("F"), Some("#F"));
        assert_eq!(pkg.symbols().local_names().count(), 3);
    }

    fn names(decls: &[Declaration]) -> Vec<&str> {
        decls.iter().map(|d| d.name.as_str()).collect()
    }
}
