//! Symbol tables used to resolve `[Name]` style references.

use std::collections::{BTreeMap, BTreeSet};

use crate::parsing::inline::{LinkKind, kinds::DocLink};

/// Names declared by other packages, keyed by import path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignIndex {
    base_url: String,
    packages: BTreeMap<String, BTreeSet<String>>,
}

impl Default for ForeignIndex {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

impl ForeignIndex {
    pub const DEFAULT_BASE_URL: &'static str = "https://pkg.go.dev/";

    /// An empty index whose links are `base_url` + import path.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            packages: BTreeMap::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Registers a package and the names it exports. Member names are
    /// written qualified, e.g. `Decoder.Decode`.
    pub fn insert_package<I, S>(&mut self, import_path: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages
            .entry(import_path.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Finds a package by full import path, or by its last path element when
    /// exactly one indexed package has that name.
    pub fn find_package(&self, name: &str) -> Option<&str> {
        if let Some((path, _)) = self.packages.get_key_value(name) {
            return Some(path.as_str());
        }
        let mut matches = self
            .packages
            .keys()
            .filter(|path| path.rsplit('/').next() == Some(name));
        match (matches.next(), matches.next()) {
            (Some(path), None) => Some(path.as_str()),
            _ => None,
        }
    }

    /// URL of a package, or of one of its members when the member is indexed.
    pub fn resolve(&self, import_path: &str, member: Option<&str>) -> Option<String> {
        let names = self.packages.get(import_path)?;
        match member {
            None => Some(format!("{}{import_path}", self.base_url)),
            Some(m) if names.contains(m) => Some(format!("{}{import_path}#{m}", self.base_url)),
            Some(_) => None,
        }
    }
}

/// Local declaration names with their documentation addresses, plus the
/// foreign index consulted when a name is not local.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    local: BTreeMap<String, String>,
    foreign: ForeignIndex,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_foreign(foreign: ForeignIndex) -> Self {
        Self {
            local: BTreeMap::new(),
            foreign,
        }
    }

    pub fn insert_local(&mut self, name: impl Into<String>, address: impl Into<String>) {
        self.local.insert(name.into(), address.into());
    }

    /// Adds a local name whose address is the in-page anchor `#name`.
    pub fn add_local(&mut self, name: impl Into<String>) {
        let name = name.into();
        let address = format!("#{name}");
        self.local.insert(name, address);
    }

    pub fn local(&self, name: &str) -> Option<&str> {
        self.local.get(name).map(String::as_str)
    }

    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.local.keys().map(String::as_str)
    }

    /// Resolves a parsed reference to `(url, kind)`. Local names are tried
    /// before foreign packages.
    pub fn resolve(&self, link: &DocLink) -> Option<(String, LinkKind)> {
        if let Some(path) = &link.import_path {
            let member = (!link.segments.is_empty()).then(|| link.segments.join("."));
            return self
                .foreign
                .resolve(path, member.as_deref())
                .map(|url| (url, LinkKind::ForeignSymbol));
        }

        if link.segments.len() <= 2
            && let Some(address) = self.local(&link.segments.join("."))
        {
            return Some((address.to_string(), LinkKind::LocalSymbol));
        }

        let (package, rest) = link.segments.split_first()?;
        let member = (!rest.is_empty()).then(|| rest.join("."));
        let path = self.foreign.find_package(package)?;
        self.foreign
            .resolve(path, member.as_deref())
            .map(|url| (url, LinkKind::ForeignSymbol))
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut table = SymbolTable::new();
        for name in iter {
            table.add_local(name);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_link(inner: &str) -> DocLink {
        DocLink::parse(inner).unwrap()
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(
            ForeignIndex::new("http://localhost:6060/pkg").base_url(),
            "http://localhost:6060/pkg/"
        );
    }

    #[test]
    fn ambiguous_short_package_name_does_not_resolve() {
        let mut index = ForeignIndex::default();
        index.insert_package("math/rand", ["Int"]);
        index.insert_package("crypto/rand", ["Read"]);
        assert_eq!(index.find_package("rand"), None);
        assert_eq!(index.find_package("crypto/rand"), Some("crypto/rand"));
    }

    #[test]
    fn unknown_foreign_member_does_not_resolve() {
        let mut index = ForeignIndex::default();
        index.insert_package("fmt", ["Println"]);
        assert_eq!(index.resolve("fmt", Some("Printf")), None);
        assert_eq!(
            index.resolve("fmt", Some("Println")).as_deref(),
            Some("https://pkg.go.dev/fmt#Println")
        );
    }

    #[test]
    fn local_name_shadows_package() {
        let mut foreign = ForeignIndex::default();
        foreign.insert_package("fmt", Vec::<String>::new());
        let mut table = SymbolTable::with_foreign(foreign);
        table.add_local("fmt");
        assert_eq!(
            table.resolve(&doc_link("fmt")),
            Some(("#fmt".to_string(), LinkKind::LocalSymbol))
        );
    }

    #[test]
    fn three_segments_only_resolve_in_foreign_index() {
        let table: SymbolTable = ["Name.Member"].into_iter().collect();
        assert_eq!(table.resolve(&doc_link("pks.Name.Member")), None);
        assert!(table.resolve(&doc_link("Name.Member")).is_some());
    }

    #[test]
    fn custom_addresses_are_kept() {
        let mut table = SymbolTable::new();
        table.insert_local("Github", "/pkg/godoctricks#Github");
        assert_eq!(
            table.resolve(&doc_link("Github")),
            Some(("/pkg/godoctricks#Github".to_string(), LinkKind::LocalSymbol))
        );
    }
}
