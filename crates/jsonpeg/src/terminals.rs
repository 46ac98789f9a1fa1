//! Terminal rules: the only rules that consume input or push values.
//!
//! Each terminal skips leading whitespace, then inspects the next characters.
//! On failure nothing is pushed and the cursor is back where it started, apart
//! from the skipped whitespace (see [`ParserOptions`]).
//!
//! [`ParserOptions`]: crate::ParserOptions
use alloc::string::String;

use crate::{ParseState, Rule, Value};

/// Matches one expected character. Pushes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char(char);

impl Char {
    /// A rule matching `expected`.
    #[must_use]
    pub fn new(expected: char) -> Self {
        Self(expected)
    }

    /// The character this rule expects.
    #[must_use]
    pub fn expected(&self) -> char {
        self.0
    }
}

impl Rule for Char {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        let entry = state.checkpoint();
        if state.peek() != Some(self.0) {
            return state.reject(entry);
        }
        state.cursor_mut().advance(self.0.len_utf8());
        true
    }
}

/// Matches `"..."` and pushes the text between the quotes as
/// [`Value::String`].
///
/// The closing quote is the next `"` after the opening one: there are no
/// escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringLiteral;

impl StringLiteral {
    /// The string literal rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for StringLiteral {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        let entry = state.checkpoint();
        if state.peek() != Some('"') {
            return state.reject(entry);
        }

        let body = state.cursor().rest().get(1..).unwrap_or_default();
        let Some(len) = body.find('"') else {
            return state.reject(entry);
        };

        let text = String::from(&body[..len]);
        // opening quote + text + closing quote
        state.cursor_mut().advance(len + 2);
        state.stack_mut().push(Value::String(text));
        true
    }
}

fn any_digit(_: char) -> bool {
    true
}

/// Matches the longest run of ASCII digits and pushes it as
/// [`Value::Number`].
///
/// Signs, fractions and exponents are not part of the run. Whitespace ends
/// the run, so `1 2` matches `1` only and never reads as `12`.
///
/// Only `0` to `9` count as digits. Other Unicode decimal digits such as
/// `٣` (ARABIC-INDIC DIGIT THREE) are rejected, even though they are numeric.
///
/// ```rust
/// use jsonpeg::{parse, Number, Value};
///
/// let outcome = parse(&Number::new(), "1 2");
/// assert_eq!((outcome.position, outcome.value()), (1, Some(&Value::Number("1".into()))));
/// assert!(!parse(&Number::new(), "٣").matched);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Number {
    filter: fn(char) -> bool,
}

impl Number {
    /// A rule matching any run of digits.
    #[must_use]
    pub fn new() -> Self {
        Self { filter: any_digit }
    }

    /// A rule matching a run of digits that also satisfy `filter`.
    ///
    /// ```rust
    /// use jsonpeg::{parse, Number, Value};
    ///
    /// let even = Number::matching(|c| matches!(c, '0' | '2' | '4' | '6' | '8'));
    /// let outcome = parse(&even, "2461");
    /// assert_eq!(outcome.value(), Some(&Value::Number("246".into())));
    /// ```
    #[must_use]
    pub fn matching(filter: fn(char) -> bool) -> Self {
        Self { filter }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for Number {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        let entry = state.checkpoint();
        state.skip_whitespace();

        let rest = state.cursor().rest();
        // ASCII digits are one byte each
        let len = rest
            .bytes()
            .take_while(|b| b.is_ascii_digit() && (self.filter)(char::from(*b)))
            .count();
        if len == 0 {
            return state.reject(entry);
        }

        state.cursor_mut().advance(len);
        state.stack_mut().push(Value::Number(String::from(&rest[..len])));
        true
    }
}
