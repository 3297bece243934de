/// Heading syntax: explicit `# Title` lines and implicit title-like lines.
pub struct Heading;

impl Heading {
    /// The explicit heading prefix character.
    pub const MARKER: char = '#';
    /// Deepest explicit heading level (`######`).
    pub const MAX_LEVEL: u8 = 6;

    /// Characters that disqualify a line from being an implicit heading.
    const NOT_IN_IMPLICIT: &'static [char] =
        &['.', ':', ';', '!', '?', '"', '`', '[', ']', '{', '}'];

    /// Parses `# Title` into its level and text.
    ///
    /// The `#` run must be followed by a space or tab and non-empty text.
    pub fn explicit(line: &str) -> Option<(u8, &str)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let rest = &line[hashes..];
        let text = rest.strip_prefix([' ', '\t'])?.trim();
        if text.is_empty() {
            return None;
        }
        Some((hashes as u8, text))
    }

    /// Whether `line` looks like a title: starts with an uppercase letter,
    /// ends with a letter, digit or `)`, and carries no sentence punctuation.
    pub fn implicit(line: &str) -> bool {
        let (Some(first), Some(last)) = (line.chars().next(), line.chars().next_back()) else {
            return false;
        };
        first.is_uppercase()
            && (last.is_alphanumeric() || last == ')')
            && !line.contains(Self::NOT_IN_IMPLICIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Explicit Heading", Some((1, "Explicit Heading")))]
    #[case("## Second level", Some((2, "Second level")))]
    #[case("#\tTabbed", Some((1, "Tabbed")))]
    #[case("# Update: Go 1.19 is here!", Some((1, "Update: Go 1.19 is here!")))]
    #[case("#NoSpace", None)]
    #[case("# ", None)]
    #[case("####### Too deep", None)]
    #[case("Not a heading", None)]
    fn explicit_headings(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::explicit(line), expected);
    }

    #[rstest]
    #[case("Implicit Heading", true)]
    #[case("Markdown-Style Links", true)]
    #[case("Go 1", true)]
    #[case("Constructors (Factories)", true)]
    #[case("lowercase start", false)]
    #[case("Ends with a period.", false)]
    #[case("Results in:", false)]
    #[case("Contains: colon inside", false)]
    #[case("See [Links] below", false)]
    #[case("", false)]
    fn implicit_headings(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Heading::implicit(line), expected);
    }
}
