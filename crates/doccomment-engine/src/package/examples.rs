//! Runnable examples and how their names bind them to declarations.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::CommentBlock;

static OUTPUT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[ \t]*(unordered )?output:").expect("valid regex"));

/// Expected output declared by a trailing `// Output:` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleOutput {
    pub text: String,
    /// Declared with `// Unordered output:`; lines may appear in any order.
    pub unordered: bool,
}

#[derive(Debug, Clone)]
pub struct Example {
    pub name: String,
    pub comment: CommentBlock,
    /// Body without the output comment.
    pub code: String,
    pub output: Option<ExampleOutput>,
}

impl Example {
    /// Builds an example from its function name, doc comment and body,
    /// splitting off a trailing output comment.
    pub fn new(name: impl Into<String>, comment: CommentBlock, body: &str) -> Self {
        let (code, output) = split_output(body);
        Self {
            name: name.into(),
            comment,
            code,
            output,
        }
    }

    /// Where the example belongs, by name.
    pub fn target(&self) -> Option<ExampleTarget> {
        ExampleTarget::parse(&self.name)
    }

    /// Label shown with the example, from an `_suffix` name part.
    pub fn suffix(&self) -> Option<&str> {
        self.target()?;
        let (_, suffix) = self.name.rsplit_once('_')?;
        starts_lowercase(suffix).then_some(suffix)
    }
}

/// The declaration an example is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleTarget {
    Package,
    /// `T`, `F`, or `T.M`.
    Symbol(String),
}

impl ExampleTarget {
    /// Parses `Example`, `Example_suffix`, `ExampleT`, `ExampleT_suffix`,
    /// `ExampleT_M` and `ExampleT_M_suffix`.
    pub fn parse(name: &str) -> Option<ExampleTarget> {
        let rest = name.strip_prefix("Example")?;
        if rest.is_empty() {
            return Some(ExampleTarget::Package);
        }
        if let Some(suffix) = rest.strip_prefix('_') {
            return starts_lowercase(suffix).then_some(ExampleTarget::Package);
        }

        let symbol = match rest.rsplit_once('_') {
            Some((head, suffix)) if starts_lowercase(suffix) => head,
            _ => rest,
        };
        let parts: Vec<&str> = symbol.split('_').collect();
        let valid = parts.len() <= 2 && parts.iter().all(|p| starts_uppercase(p));
        valid.then(|| ExampleTarget::Symbol(parts.join(".")))
    }
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_lowercase)
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn split_output(body: &str) -> (String, Option<ExampleOutput>) {
    let lines: Vec<&str> = body.trim_end().lines().collect();
    let comment_start = lines
        .iter()
        .rposition(|l| !l.trim_start().starts_with("//"))
        .map_or(0, |i| i + 1);

    let comment: Vec<&str> = lines[comment_start..]
        .iter()
        .map(|l| {
            let l = l.trim_start().trim_start_matches("//");
            l.strip_prefix(' ').unwrap_or(l)
        })
        .collect();

    let Some(first) = comment.first() else {
        return (body.trim_end().to_string(), None);
    };
    let Some(prefix) = OUTPUT_PREFIX.captures(first) else {
        return (body.trim_end().to_string(), None);
    };

    let unordered = prefix.get(1).is_some();
    let mut text = vec![first[prefix.get(0).map_or(0, |m| m.end())..].trim()];
    text.extend(comment[1..].iter().map(|l| l.trim_end()));

    let code = lines[..comment_start].join("\n").trim_end().to_string();
    let output = ExampleOutput {
        text: text.join("\n").trim().to_string(),
        unordered,
    };
    (code, Some(output))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Example", Some(ExampleTarget::Package))]
    #[case("Example_other", Some(ExampleTarget::Package))]
    #[case("ExampleExamples", Some(ExampleTarget::Symbol("Examples".into())))]
    #[case("ExampleExamples_other", Some(ExampleTarget::Symbol("Examples".into())))]
    #[case("ExampleExamples_Output", Some(ExampleTarget::Symbol("Examples.Output".into())))]
    #[case("ExampleT_M_suffix", Some(ExampleTarget::Symbol("T.M".into())))]
    #[case("Example_Other", None)]
    #[case("Exampleexamples", None)]
    #[case("ExampleA_B_C", None)]
    #[case("TestExample", None)]
    fn targets(#[case] name: &str, #[case] expected: Option<ExampleTarget>) {
        assert_eq!(ExampleTarget::parse(name), expected);
    }

    #[test]
    fn suffix_is_the_lowercase_tail() {
        let ex = Example::new("ExampleExamples_other", CommentBlock::default(), "");
        assert_eq!(ex.suffix(), Some("other"));
        let ex = Example::new("ExampleT_M", CommentBlock::default(), "");
        assert_eq!(ex.suffix(), None);
    }

    #[test]
    fn output_comment_is_split_off() {
        let ex = Example::new(
            "ExampleExamples_output",
            CommentBlock::default(),
            "fmt.Println(\"Hello\")\n// Output: Hello\n",
        );
        assert_eq!(ex.code, "fmt.Println(\"Hello\")");
        assert_eq!(
            ex.output,
            Some(ExampleOutput {
                text: "Hello".into(),
                unordered: false
            })
        );
    }

    #[test]
    fn multi_line_unordered_output() {
        let body = "for k := range m {\n\tfmt.Println(k)\n}\n// Unordered output:\n// a\n// b";
        let ex = Example::new("Example", CommentBlock::default(), body);
        assert_eq!(ex.code, "for k := range m {\n\tfmt.Println(k)\n}");
        assert_eq!(
            ex.output,
            Some(ExampleOutput {
                text: "a\nb".into(),
                unordered: true
            })
        );
    }

    #[test]
    fn trailing_comment_without_output_is_code() {
        let ex = Example::new("Example", CommentBlock::default(), "f()\n// done");
        assert_eq!(ex.code, "f()\n// done");
        assert_eq!(ex.output, None);
    }
}
