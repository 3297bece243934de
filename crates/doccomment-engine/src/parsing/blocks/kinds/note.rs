use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::Note;

static NOTE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z]+)\(([^)]+)\):[ \t]*(.*)$").expect("note marker pattern is valid")
});

/// Marker note syntax: `MARKER(id): text`.
///
/// The marker is two or more uppercase ASCII letters and the id is any
/// non-blank text without `)`.
pub struct NoteMarker;

impl NoteMarker {
    pub fn parse(line: &str) -> Option<Note> {
        let caps = NOTE_START.captures(line)?;
        let id = caps[2].trim();
        if id.is_empty() {
            return None;
        }
        Some(Note {
            marker: caps[1].to_string(),
            id: id.to_string(),
            text: caps[3].trim().to_string(),
        })
    }
}
