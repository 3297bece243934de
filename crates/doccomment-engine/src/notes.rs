//! Grouping of marker notes (`BUG(who): ...`) into per-marker sections.

use std::collections::{BTreeMap, BTreeSet};

use crate::parsing::{ParsedDoc, blocks::Note, inline::LinkDefs};

/// A note with the link definitions of the comment it was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedNote {
    pub note: Note,
    pub defs: LinkDefs,
    /// Declaration id or package name, when rendering a whole package.
    pub location: Option<String>,
}

impl SourcedNote {
    /// The notes of one parsed comment.
    pub fn from_doc(doc: &ParsedDoc, location: Option<&str>) -> Vec<SourcedNote> {
        let defs = doc.link_defs();
        doc.notes()
            .map(|note| SourcedNote {
                note: note.clone(),
                defs: defs.clone(),
                location: location.map(str::to_string),
            })
            .collect()
    }
}

/// Notes grouped by marker, markers in sorted order, notes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSections(BTreeMap<String, Vec<SourcedNote>>);

impl NoteSections {
    /// Groups every note regardless of marker.
    pub fn all(notes: impl IntoIterator<Item = SourcedNote>) -> Self {
        let mut sections = BTreeMap::<String, Vec<SourcedNote>>::new();
        for sourced in notes {
            sections
                .entry(sourced.note.marker.clone())
                .or_default()
                .push(sourced);
        }
        Self(sections)
    }

    /// Groups only the notes whose marker is in `allowed`.
    pub fn collect(
        notes: impl IntoIterator<Item = SourcedNote>,
        allowed: &BTreeSet<String>,
    ) -> Self {
        Self::all(
            notes
                .into_iter()
                .filter(|n| allowed.contains(&n.note.marker)),
        )
    }

    /// A copy restricted to the `allowed` markers.
    pub fn filtered(&self, allowed: &BTreeSet<String>) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(marker, _)| allowed.contains(*marker))
                .map(|(m, n)| (m.clone(), n.clone()))
                .collect(),
        )
    }

    pub fn get(&self, marker: &str) -> &[SourcedNote] {
        self.0.get(marker).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SourcedNote])> {
        self.0.iter().map(|(m, n)| (m.as_str(), n.as_slice()))
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Section heading for a marker: `BUG` becomes `Bugs`.
pub fn section_title(marker: &str) -> String {
    let mut chars = marker.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut title: String = first.to_uppercase().collect();
    title.push_str(&chars.as_str().to_lowercase());
    title.push('s');
    title
}
