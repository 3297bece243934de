use xi_rope::Rope;

use super::span::Span;

/// A reference to a single comment line with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, including its newline if present.
    pub text: String,
}

impl LineRef {
    /// The line text without its line terminator or trailing whitespace.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so spans account for newline characters and consecutive
/// lines tile the rope without gaps.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
