use std::collections::BTreeMap;

use crate::symbols::SymbolTable;

use super::{
    kinds::DocLink,
    parser::parse_inline,
    types::{Inline, InlineNode, LinkKind},
};

/// `[label]: url` definitions of one comment, by label.
///
/// When a label is defined twice the first definition wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDefs(BTreeMap<String, String>);

impl LinkDefs {
    pub fn insert(&mut self, label: impl Into<String>, url: impl Into<String>) {
        self.0.entry(label.into()).or_insert_with(|| url.into());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<L: Into<String>, U: Into<String>> FromIterator<(L, U)> for LinkDefs {
    fn from_iter<T: IntoIterator<Item = (L, U)>>(iter: T) -> Self {
        let mut defs = LinkDefs::default();
        for (label, url) in iter {
            defs.insert(label, url);
        }
        defs
    }
}

/// Result of resolving the references in one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    pub inlines: Vec<Inline>,
    /// Link definition labels that were referenced, in first-use order.
    pub used_defs: Vec<String>,
    /// Doc-link shaped references that matched no symbol, as written.
    pub unresolved: Vec<String>,
}

/// Resolves bracketed references and bare URLs in `text`.
///
/// For `[x]` a link definition labelled `x` wins, then a local symbol, then
/// a foreign package symbol. Anything else is kept as literal text.
pub fn resolve_inline(text: &str, defs: &LinkDefs, symbols: &SymbolTable) -> Resolved {
    let mut out = Resolved::default();

    for node in parse_inline(text) {
        match node {
            InlineNode::Text(sp) => push_text(&mut out.inlines, &text[sp.start..sp.end]),
            InlineNode::Url(sp) => {
                let url = &text[sp.start..sp.end];
                out.inlines.push(Inline::Link {
                    text: url.to_string(),
                    url: url.to_string(),
                    kind: LinkKind::Url,
                });
            }
            InlineNode::Bracket { full, inner } => {
                let label = &text[inner.start..inner.end];
                let written = &text[full.start..full.end];

                if let Some(url) = defs.get(label) {
                    out.inlines.push(Inline::Link {
                        text: label.to_string(),
                        url: url.to_string(),
                        kind: LinkKind::Url,
                    });
                    if !out.used_defs.iter().any(|l| l == label) {
                        out.used_defs.push(label.to_string());
                    }
                    continue;
                }

                match DocLink::parse(label) {
                    Some(link) => match symbols.resolve(&link) {
                        Some((url, kind)) => out.inlines.push(Inline::Link {
                            text: label.to_string(),
                            url,
                            kind,
                        }),
                        None => {
                            push_text(&mut out.inlines, written);
                            out.unresolved.push(written.to_string());
                        }
                    },
                    None => push_text(&mut out.inlines, written),
                }
            }
        }
    }

    out
}

fn push_text(inlines: &mut Vec<Inline>, s: &str) {
    if let Some(Inline::Text(prev)) = inlines.last_mut() {
        prev.push_str(s);
    } else {
        inlines.push(Inline::Text(s.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::ForeignIndex;
    use pretty_assertions::assert_eq;

    fn symbols() -> SymbolTable {
        let mut foreign = ForeignIndex::default();
        foreign.insert_package("encoding/json", ["Marshal", "Decoder.Decode"]);
        let mut table = SymbolTable::with_foreign(foreign);
        table.add_local("Links");
        table.add_local("Methods");
        table.add_local("Methods.Foo");
        table
    }

    fn link(text: &str, url: &str, kind: LinkKind) -> Inline {
        Inline::Link {
            text: text.into(),
            url: url.into(),
            kind,
        }
    }

    #[test]
    fn link_definition_reference() {
        let defs: LinkDefs = [("online", "https://duckduckgo.com/?q=golang")]
            .into_iter()
            .collect();
        let r = resolve_inline("You can search for Go [online].", &defs, &symbols());
        assert_eq!(
            r.inlines,
            vec![
                Inline::Text("You can search for Go ".into()),
                link("online", "https://duckduckgo.com/?q=golang", LinkKind::Url),
                Inline::Text(".".into()),
            ]
        );
        assert_eq!(r.used_defs, vec!["online".to_string()]);
    }

    #[test]
    fn link_definition_beats_symbol() {
        let defs: LinkDefs = [("Links", "https://example.com/links")].into_iter().collect();
        let r = resolve_inline("[Links]", &defs, &symbols());
        assert_eq!(
            r.inlines,
            vec![link("Links", "https://example.com/links", LinkKind::Url)]
        );
    }

    #[test]
    fn local_symbols_resolve() {
        let r = resolve_inline("[Methods.Foo] and [*Methods]", &LinkDefs::default(), &symbols());
        assert_eq!(
            r.inlines,
            vec![
                link("Methods.Foo", "#Methods.Foo", LinkKind::LocalSymbol),
                Inline::Text(" and ".into()),
                link("*Methods", "#Methods", LinkKind::LocalSymbol),
            ]
        );
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn foreign_symbols_resolve_by_short_and_full_name() {
        let r = resolve_inline(
            "[json.Marshal] [encoding/json.Decoder.Decode] [json]",
            &LinkDefs::default(),
            &symbols(),
        );
        let urls: Vec<_> = r
            .inlines
            .iter()
            .filter_map(|i| match i {
                Inline::Link { url, kind, .. } => Some((url.as_str(), *kind)),
                Inline::Text(_) => None,
            })
            .collect();
        assert_eq!(
            urls,
            vec![
                ("https://pkg.go.dev/encoding/json#Marshal", LinkKind::ForeignSymbol),
                ("https://pkg.go.dev/encoding/json#Decoder.Decode", LinkKind::ForeignSymbol),
                ("https://pkg.go.dev/encoding/json", LinkKind::ForeignSymbol),
            ]
        );
    }

    #[test]
    fn unknown_symbol_stays_literal() {
        let r = resolve_inline("See [Unknown.Symbol] now.", &LinkDefs::default(), &symbols());
        assert_eq!(
            r.inlines,
            vec![Inline::Text("See [Unknown.Symbol] now.".into())]
        );
        assert_eq!(r.unresolved, vec!["[Unknown.Symbol]".to_string()]);
    }

    #[test]
    fn prose_in_brackets_is_not_reported() {
        let r = resolve_inline("[other unicode characters]", &LinkDefs::default(), &symbols());
        assert_eq!(
            r.inlines,
            vec![Inline::Text("[other unicode characters]".into())]
        );
        assert!(r.unresolved.is_empty());
    }

    #[test]
    fn first_definition_wins() {
        let defs: LinkDefs = [("x", "https://first"), ("x", "https://second")]
            .into_iter()
            .collect();
        assert_eq!(defs.get("x"), Some("https://first"));
        assert_eq!(defs.len(), 1);
    }
}
