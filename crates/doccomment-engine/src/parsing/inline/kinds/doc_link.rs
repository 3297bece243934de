/// A documentation reference written inside brackets.
///
/// - `[Name]`, `[Name.Member]` for the current package
/// - `[pkg]`, `[pkg.Name]`, `[pkg.Name.Member]` for another package
/// - `[import/path.Name]` for a package named by its full import path
///
/// A leading `*` (`[*Name]`) is accepted and kept only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
    pub pointer: bool,
    /// Set when the reference spelled out an import path containing `/`.
    pub import_path: Option<String>,
    /// Dot-separated identifiers. Without an import path the first segment
    /// may be a local name or a package name.
    pub segments: Vec<String>,
}

impl DocLink {
    const MAX_SEGMENTS: usize = 3;

    pub fn parse(inner: &str) -> Option<DocLink> {
        let (pointer, rest) = match inner.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, inner),
        };

        if let Some(slash) = rest.rfind('/') {
            let dir = &rest[..slash];
            let mut tail = rest[slash + 1..].split('.');
            let package = tail.next()?;
            let names: Vec<&str> = tail.collect();
            let valid = !dir.is_empty()
                && dir.split('/').all(is_path_element)
                && is_path_element(package)
                && names.len() < Self::MAX_SEGMENTS
                && names.iter().all(|n| is_ident(n));
            return valid.then(|| DocLink {
                pointer,
                import_path: Some(format!("{dir}/{package}")),
                segments: names.into_iter().map(String::from).collect(),
            });
        }

        let segments: Vec<&str> = rest.split('.').collect();
        let valid = segments.len() <= Self::MAX_SEGMENTS && segments.iter().all(|s| is_ident(s));
        valid.then(|| DocLink {
            pointer,
            import_path: None,
            segments: segments.into_iter().map(String::from).collect(),
        })
    }
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn is_path_element(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}
