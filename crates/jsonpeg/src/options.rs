/// Configuration options for a parse run.
///
/// Options belong to the run, not to the grammar: one [`Grammar`] can be
/// used with different options.
///
/// # Examples
///
/// ```rust
/// use jsonpeg::{Grammar, ParserOptions};
///
/// let grammar = Grammar::json();
/// let options = ParserOptions {
///     allow_json_whitespace: true,
///     ..Default::default()
/// };
/// let value = grammar.parse_document_with_options("{\t\"a\":\r\n1}", options);
/// assert!(value.is_ok());
/// ```
///
/// # Default
///
/// Every switch defaults to `false`; [`max_depth`](Self::max_depth) defaults
/// to [`DEFAULT_MAX_DEPTH`].
///
/// [`Grammar`]: crate::Grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to skip the full JSON whitespace set before tokens.
    ///
    /// By default only space (U+0020) and line feed (U+000A) are skipped.
    /// When enabled, carriage return (U+000D) and horizontal tab (U+0009) are
    /// skipped as well.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_json_whitespace: bool,

    /// Whether a failing terminal rewinds the whitespace it skipped.
    ///
    /// Terminals skip leading whitespace before looking at the next character,
    /// and by default that skip is kept even when the terminal then fails.
    /// Any enclosing [`Sequence`] still rewinds to its own entry position, so
    /// the difference is only visible after a failed terminal or a failed
    /// [`Choice`] of terminals.
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`Sequence`]: crate::Sequence
    /// [`Choice`]: crate::Choice
    pub restore_whitespace_on_failure: bool,

    /// How many [`ForwardReference`]s may be resolving at once.
    ///
    /// Recursion in a grammar always passes through a forward reference, so
    /// this bounds how deep a parse can nest. A reference reached at the limit
    /// fails instead of descending. In the JSON grammar every value inside a
    /// container is reached through one reference, so the limit is the
    /// deepest container nesting a scalar may sit at.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    ///
    /// [`ForwardReference`]: crate::ForwardReference
    pub max_depth: usize,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic when a rule fails without restoring the cursor and stack.
    ///
    /// Enabled only in test and fuzzing builds.
    pub check_restoration: bool,
}

/// Default for [`ParserOptions::max_depth`], the same recursion limit
/// `serde_json` applies.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_json_whitespace: false,
            restore_whitespace_on_failure: false,
            max_depth: DEFAULT_MAX_DEPTH,
            #[cfg(any(test, feature = "fuzzing"))]
            check_restoration: false,
        }
    }
}

impl ParserOptions {
    pub(crate) fn is_whitespace(&self, c: char) -> bool {
        match c {
            ' ' | '\n' => true,
            '\r' | '\t' => self.allow_json_whitespace,
            _ => false,
        }
    }
}
