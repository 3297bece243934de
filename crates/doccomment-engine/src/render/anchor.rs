use std::collections::BTreeMap;

/// Prefix of heading anchors, keeping them apart from symbol anchors.
pub const HEADING_PREFIX: &str = "hdr-";

/// Anchor for a heading: every char that is not a letter or digit becomes `_`.
pub fn heading_anchor(text: &str) -> String {
    let mut id = String::from(HEADING_PREFIX);
    id.extend(
        text.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' }),
    );
    id
}

/// Anchor for a notes section, e.g. `pkg-note-BUG`.
pub fn note_anchor(marker: &str) -> String {
    format!("pkg-note-{marker}")
}

/// Hands out anchors that are unique within one rendered document.
///
/// Repeats get `-2`, `-3`, ... appended. Slugs never contain `-` after the
/// prefix, so a suffixed anchor cannot collide with another heading's.
#[derive(Debug, Default)]
pub struct AnchorSet {
    seen: BTreeMap<String, usize>,
}

impl AnchorSet {
    pub fn unique(&mut self, anchor: String) -> String {
        let count = self.seen.entry(anchor.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            anchor
        } else {
            format!("{anchor}-{count}")
        }
    }
}
