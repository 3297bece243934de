use std::sync::LazyLock;

use regex::Regex;

static LINK_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]+)\]:[ \t]+(\S+)$").expect("link definition pattern is valid")
});

/// Markdown-style link definition lines: `[label]: url`.
pub struct LinkDef;

impl LinkDef {
    /// Parses a definition line into `(label, url)`.
    ///
    /// A line with an empty label or no URL is not a definition.
    pub fn parse(line: &str) -> Option<(String, String)> {
        let caps = LINK_DEF.captures(line)?;
        let label = caps[1].trim();
        if label.is_empty() {
            return None;
        }
        Some((label.to_string(), caps[2].to_string()))
    }
}
