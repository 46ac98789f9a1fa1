/// Input text plus the current scan position.
///
/// Positions are byte offsets into the input. Every method that moves the
/// cursor keeps it on a character boundary as long as callers advance by whole
/// characters (`char::len_utf8` or lengths of slices of [`rest`]).
///
/// [`rest`]: Cursor::rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<'src> {
    input: &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    /// A cursor at the start of `input`.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self { input, position: 0 }
    }

    /// The whole input.
    #[must_use]
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Current byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the input in bytes.
    #[must_use]
    pub fn length(&self) -> usize {
        self.input.len()
    }

    /// `true` once every byte of the input has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        debug_assert!(self.input.is_char_boundary(self.position));
        self.input.get(self.position..).unwrap_or_default()
    }

    /// The character at the current position, without skipping anything.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Skips characters matching `is_whitespace`, then returns the current
    /// character.
    ///
    /// The skip is not undone by the caller failing to match; rules that need
    /// to rewind take a [`Checkpoint`] first.
    ///
    /// [`Checkpoint`]: crate::Checkpoint
    pub fn peek(&mut self, is_whitespace: impl Fn(char) -> bool) -> Option<char> {
        self.skip_while(is_whitespace);
        self.current()
    }

    /// Advances past the run of characters matching `pred` and returns the
    /// number of bytes skipped.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let skipped: usize = self
            .rest()
            .chars()
            .take_while(|c| pred(*c))
            .map(char::len_utf8)
            .sum();
        self.position += skipped;
        skipped
    }

    /// Moves forward by `n` bytes, stopping at the end of the input.
    pub fn advance(&mut self, n: usize) {
        self.position = self.position.saturating_add(n).min(self.input.len());
    }

    pub(crate) fn reset(&mut self, position: usize) {
        debug_assert!(position <= self.input.len());
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space_or_newline(c: char) -> bool {
        c == ' ' || c == '\n'
    }

    #[test]
    fn peek_skips_whitespace_destructively() {
        let mut cursor = Cursor::new("  \n x");
        assert_eq!(cursor.peek(space_or_newline), Some('x'));
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.current(), Some('x'));
    }

    #[test]
    fn peek_does_not_skip_tabs_with_default_set() {
        let mut cursor = Cursor::new("\tx");
        assert_eq!(cursor.peek(space_or_newline), Some('\t'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn end_is_at_length() {
        let mut cursor = Cursor::new("ab");
        assert!(!cursor.is_at_end());
        cursor.advance(1);
        assert!(!cursor.is_at_end());
        cursor.advance(1);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(space_or_newline), None);
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn advance_saturates_at_length() {
        let mut cursor = Cursor::new("abc");
        cursor.advance(10);
        assert_eq!(cursor.position(), cursor.length());
    }

    #[test]
    fn skip_while_counts_bytes() {
        let mut cursor = Cursor::new("ééx");
        assert_eq!(cursor.skip_while(|c| c == 'é'), 4);
        assert_eq!(cursor.current(), Some('x'));
    }
}
