use std::sync::LazyLock;

use regex::Regex;

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:https?|ftp|file)://[^\s<>"]+"#).expect("bare URL pattern is valid")
});

/// Bare URL grammar for auto-linking.
pub struct Url;

impl Url {
    /// Punctuation that ends a sentence rather than a URL.
    const TRAILING: &'static [char] = &['.', ',', ':', ';', '?', '!', '\''];

    /// Byte length of the URL at the start of `s`, if one starts there.
    ///
    /// Trailing sentence punctuation and unbalanced closing parentheses are
    /// left out of the URL.
    pub fn match_len(s: &str) -> Option<usize> {
        let m = BARE_URL.find(s)?;
        let mut url = m.as_str();
        loop {
            if let Some(stripped) = url.strip_suffix(Self::TRAILING) {
                url = stripped;
            } else if url.ends_with(')') && url.matches(')').count() > url.matches('(').count() {
                url = &url[..url.len() - 1];
            } else {
                break;
            }
        }
        url.split_once("://")
            .is_some_and(|(_, host)| !host.is_empty())
            .then_some(url.len())
    }
}
