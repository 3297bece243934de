pub struct Bracket;

impl Bracket {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';

    /// Brackets and URLs must not touch a letter or digit on either side.
    pub fn is_boundary(c: Option<char>) -> bool {
        !c.is_some_and(char::is_alphanumeric)
    }
}
