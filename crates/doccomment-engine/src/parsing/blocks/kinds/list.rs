use serde::Serialize;

/// The marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListMarker {
    /// `-`, `*`, `+` or `•`.
    Bullet(char),
    /// `1.` or `1)`.
    Number(u32),
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Number(_))
    }
}

/// List item syntax.
pub struct List;

impl List {
    pub const BULLETS: [char; 4] = ['-', '*', '+', '•'];
    pub const NUMBER_TERMINATORS: [char; 2] = ['.', ')'];
    /// More digits than this is prose, not a list number.
    const MAX_DIGITS: usize = 9;

    /// Splits `text` (leading whitespace already removed) into its marker
    /// and item text. The marker must be followed by a space or tab.
    pub fn marker(text: &str) -> Option<(ListMarker, &str)> {
        let first = text.chars().next()?;
        if Self::BULLETS.contains(&first) {
            let rest = &text[first.len_utf8()..];
            return Self::item_text(rest).map(|t| (ListMarker::Bullet(first), t));
        }

        let digits = text.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > Self::MAX_DIGITS {
            return None;
        }
        let rest = text[digits..].strip_prefix(Self::NUMBER_TERMINATORS)?;
        let n = text[..digits].parse().ok()?;
        Self::item_text(rest).map(|t| (ListMarker::Number(n), t))
    }

    fn item_text(rest: &str) -> Option<&str> {
        let text = rest.strip_prefix([' ', '\t'])?.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item 1", Some((ListMarker::Bullet('-'), "item 1")))]
    #[case("* star", Some((ListMarker::Bullet('*'), "star")))]
    #[case("+ plus", Some((ListMarker::Bullet('+'), "plus")))]
    #[case("• unicode", Some((ListMarker::Bullet('•'), "unicode")))]
    #[case("1. first", Some((ListMarker::Number(1), "first")))]
    #[case("12) twelfth", Some((ListMarker::Number(12), "twelfth")))]
    #[case("-notes=\"BUG|TODO\"", None)]
    #[case("-", None)]
    #[case("1.5 is a number", None)]
    #[case("1234567890. too long", None)]
    #[case("plain", None)]
    fn markers(#[case] text: &str, #[case] expected: Option<(ListMarker, &str)>) {
        assert_eq!(List::marker(text), expected);
    }

    #[test]
    fn numbers_are_ordered() {
        assert!(ListMarker::Number(3).is_ordered());
        assert!(!ListMarker::Bullet('-').is_ordered());
    }
}
