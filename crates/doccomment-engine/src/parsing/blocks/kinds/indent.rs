/// Leading-whitespace helpers shared by the classifier and code blocks.
pub struct Indent;

impl Indent {
    const WHITESPACE: [char; 2] = [' ', '\t'];

    /// Whether the line starts with a space or tab.
    pub fn is_indented(line: &str) -> bool {
        line.starts_with(Self::WHITESPACE)
    }

    /// The leading run of spaces and tabs.
    pub fn leading(line: &str) -> &str {
        let end = line.len() - line.trim_start_matches(Self::WHITESPACE).len();
        &line[..end]
    }

    /// Longest whitespace prefix shared by every non-blank line.
    ///
    /// Spaces and tabs are compared literally; a tab never matches spaces.
    pub fn common_prefix<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        let mut prefix: Option<&str> = None;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let lead = Self::leading(line);
            prefix = Some(match prefix {
                None => lead,
                Some(p) => {
                    let shared = p
                        .bytes()
                        .zip(lead.bytes())
                        .take_while(|(a, b)| a == b)
                        .count();
                    &p[..shared]
                }
            });
        }
        prefix.unwrap_or_default().to_string()
    }
}
