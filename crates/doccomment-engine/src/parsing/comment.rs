use xi_rope::Rope;

use super::rope::{LineRef, lines_with_spans};

/// The raw text of one declaration's documentation comment.
///
/// Comment markers are already stripped; each line is kept verbatim,
/// including its indentation. Immutable once captured.
#[derive(Debug, Clone, Default)]
pub struct CommentBlock {
    rope: Rope,
}

impl CommentBlock {
    /// Wraps comment text whose markers have already been removed.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
        }
    }

    /// Builds a block from individual lines, joined with `\n`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_text(&text)
    }

    /// Builds a block from comment text as it appears in source code.
    ///
    /// Line comments lose their `//` and one following space. A block
    /// comment loses its `/*` and `*/` delimiters; interior lines are kept.
    /// Lines without a marker are kept as they are.
    pub fn from_source_comment(source: &str) -> Self {
        let trimmed = source.trim();
        if let Some(inner) = trimmed.strip_prefix("/*") {
            let inner = inner.strip_suffix("*/").unwrap_or(inner);
            return Self::from_text(inner.trim_matches(['\r', '\n']));
        }

        Self::from_lines(source.lines().map(|line| {
            match line.trim_start().strip_prefix("//") {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            }
        }))
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        lines_with_spans(&self.rope)
    }

    /// True when the block contains no non-blank line.
    pub fn is_blank(&self) -> bool {
        self.lines().all(|l| l.trimmed().trim_start().is_empty())
    }

    pub fn text(&self) -> String {
        self.rope.slice_to_cow(..).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_comment_markers_are_stripped() {
        let block = CommentBlock::from_source_comment(
            "// Paragraph 1.\n//\n//\tgo get golang.org/x/tools/cmd/godoc\n//  indented",
        );
        assert_eq!(
            block.text(),
            "Paragraph 1.\n\n\tgo get golang.org/x/tools/cmd/godoc\n indented"
        );
    }

    #[test]
    fn block_comment_delimiters_are_stripped() {
        let block = CommentBlock::from_source_comment("/*\nFirst line.\n\n  code\n*/");
        assert_eq!(block.text(), "First line.\n\n  code");
    }

    #[test]
    fn from_lines_joins_with_newlines() {
        let block = CommentBlock::from_lines(["a", "", "b"]);
        assert_eq!(block.text(), "a\n\nb");
        assert_eq!(block.lines().count(), 3);
    }

    #[test]
    fn whitespace_only_block_is_blank() {
        assert!(CommentBlock::from_text("  \n\t\n").is_blank());
        assert!(CommentBlock::default().is_blank());
        assert!(!CommentBlock::from_text("\nx").is_blank());
    }
}
