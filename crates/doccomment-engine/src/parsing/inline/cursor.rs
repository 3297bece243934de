/// A cursor for char-by-char inline parsing with byte position tracking.
///
/// The position always sits on a char boundary, so slicing the input at
/// `pos()` is safe.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or_default()
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The char just before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. `n` must land on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
