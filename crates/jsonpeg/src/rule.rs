//! The rule capability and the per-run parse state.
//!
//! A grammar is a graph of [`Rule`]s built once and shared. Each parse run
//! creates a fresh [`ParseState`] (a [`Cursor`] over the input plus a
//! [`ValueStack`]) and threads it by `&mut` through the graph, so a grammar
//! never holds per-input state and two runs can never share a cursor.
//!
//! Every rule follows one contract: on success it may have advanced the
//! cursor and pushed values; on failure the cursor and stack are as it found
//! them. The single exception is whitespace skipped by a terminal before it
//! looked at the next character, which stays skipped unless
//! [`ParserOptions::restore_whitespace_on_failure`] is set.
//!
//! # Examples
//!
//! ```rust
//! use jsonpeg::{parse, Char, Number, Rule, Sequence, Value};
//!
//! let rule = Sequence::new([Number::new().into_ref(), Char::new(';').into_ref()]);
//! let outcome = parse(&rule, "42; rest");
//! assert!(outcome.matched);
//! assert_eq!(outcome.position, 3);
//! assert_eq!(outcome.value(), Some(&Value::Number("42".into())));
//! ```
use alloc::{sync::Arc, vec::Vec};
use core::fmt;

use tracing::debug;

use crate::{Cursor, ParseError, ParserOptions, Value, ValueStack};

/// The capability every grammar node provides: try to match at the current
/// cursor.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Attempts a match, returning `true` on success.
    ///
    /// Implementations must leave `state` as they found it when returning
    /// `false`; [`ParseState::checkpoint`] and [`ParseState::rollback`] make
    /// that cheap.
    fn parse(&self, state: &mut ParseState<'_>) -> bool;

    /// Erases the rule into a shareable [`RuleRef`].
    fn into_ref(self) -> RuleRef
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// A shared, type-erased rule.
pub type RuleRef = Arc<dyn Rule>;

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        (**self).parse(state)
    }
}

/// A saved cursor position and stack depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    depth: usize,
}

impl Checkpoint {
    /// Cursor byte offset at the time of the checkpoint.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Stack depth at the time of the checkpoint.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Cursor, value stack and options for a single parse run.
#[derive(Debug)]
pub struct ParseState<'src> {
    cursor: Cursor<'src>,
    stack: ValueStack,
    options: ParserOptions,
    nesting: usize,
    hit_depth_limit: bool,
}

impl<'src> ParseState<'src> {
    /// A fresh state at the start of `input` with an empty stack.
    #[must_use]
    pub fn new(input: &'src str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            stack: ValueStack::new(),
            options,
            nesting: 0,
            hit_depth_limit: false,
        }
    }

    /// The cursor.
    #[must_use]
    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    /// The cursor, mutably.
    pub fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }

    /// The value stack.
    #[must_use]
    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    /// The value stack, mutably.
    pub fn stack_mut(&mut self) -> &mut ValueStack {
        &mut self.stack
    }

    /// The options of this run.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Skips whitespace and returns the next character.
    pub fn peek(&mut self) -> Option<char> {
        let options = self.options;
        self.cursor.peek(|c| options.is_whitespace(c))
    }

    /// Skips whitespace without looking at what follows.
    pub fn skip_whitespace(&mut self) {
        let options = self.options;
        self.cursor.skip_while(|c| options.is_whitespace(c));
    }

    /// Number of nested [`enter`](Self::enter) calls not yet left.
    #[must_use]
    pub fn nesting(&self) -> usize {
        self.nesting
    }

    /// Whether any [`enter`](Self::enter) call was refused during this run.
    #[must_use]
    pub fn hit_depth_limit(&self) -> bool {
        self.hit_depth_limit
    }

    /// Opens one level of nesting, or returns `false` when
    /// [`ParserOptions::max_depth`] levels are already open.
    ///
    /// Every successful call must be paired with [`leave`](Self::leave).
    pub fn enter(&mut self) -> bool {
        if self.nesting >= self.options.max_depth {
            self.hit_depth_limit = true;
            return false;
        }
        self.nesting += 1;
        true
    }

    /// Closes a level opened by [`enter`](Self::enter).
    pub fn leave(&mut self) {
        debug_assert!(self.nesting > 0, "leave without enter");
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Saves the current position and stack depth.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.cursor.position(),
            depth: self.stack.len(),
        }
    }

    /// Restores the position and stack depth saved in `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.cursor.reset(checkpoint.position);
        self.stack.truncate(checkpoint.depth);
    }

    /// Failure path for terminals: honours
    /// [`ParserOptions::restore_whitespace_on_failure`] and returns `false`.
    pub fn reject(&mut self, checkpoint: Checkpoint) -> bool {
        if self.options.restore_whitespace_on_failure {
            self.rollback(checkpoint);
        }
        false
    }

    /// Runs `rule` against this state.
    ///
    /// Combinators call their children through here rather than through
    /// [`Rule::parse`] directly, so that test and fuzzing builds can check the
    /// restoration contract at every node.
    pub fn attempt(&mut self, rule: &dyn Rule) -> bool {
        #[cfg(any(test, feature = "fuzzing"))]
        let entry = self
            .options
            .check_restoration
            .then(|| (self.checkpoint(), self.stack.as_slice().to_vec()));

        let matched = rule.parse(self);

        #[cfg(any(test, feature = "fuzzing"))]
        {
            if let (false, Some((checkpoint, values))) = (matched, entry) {
                self.assert_restored(rule, checkpoint, &values);
            }
        }

        matched
    }

    #[cfg(any(test, feature = "fuzzing"))]
    fn assert_restored(&self, rule: &dyn Rule, checkpoint: Checkpoint, values: &[Value]) {
        assert_eq!(
            self.stack.as_slice(),
            values,
            "rule left the stack modified after failing: {rule:?}"
        );
        let position = self.cursor.position();
        if self.options.restore_whitespace_on_failure {
            assert_eq!(
                position, checkpoint.position,
                "rule moved the cursor after failing: {rule:?}"
            );
        } else {
            let skipped = self
                .cursor
                .input()
                .get(checkpoint.position..position)
                .unwrap_or("?");
            assert!(
                skipped.chars().all(|c| self.options.is_whitespace(c)),
                "rule consumed {skipped:?} after failing: {rule:?}"
            );
        }
    }

    /// Consumes the state, returning the stack contents in push order.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.stack.into_vec()
    }
}

/// Result of running a rule over an input with [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Whether the rule matched (a prefix of) the input.
    pub matched: bool,
    /// Byte offset where matching stopped.
    pub position: usize,
    /// Values left on the stack, in push order.
    pub values: Vec<Value>,
}

impl ParseOutcome {
    /// The reduced value, when the rule matched and left exactly one value.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match (self.matched, self.values.as_slice()) {
            (true, [value]) => Some(value),
            _ => None,
        }
    }

    /// Owned form of [`value`](Self::value).
    #[must_use]
    pub fn into_value(mut self) -> Option<Value> {
        if self.matched && self.values.len() == 1 {
            self.values.pop()
        } else {
            None
        }
    }
}

/// Runs `rule` once from the start of `input` with default options.
///
/// The rule may match a prefix; see [`ParseOutcome::position`] for where it
/// stopped.
#[must_use]
pub fn parse(rule: &dyn Rule, input: &str) -> ParseOutcome {
    parse_with_options(rule, input, ParserOptions::default())
}

/// Runs `rule` once from the start of `input`.
#[must_use]
pub fn parse_with_options(rule: &dyn Rule, input: &str, options: ParserOptions) -> ParseOutcome {
    let mut state = ParseState::new(input, options);
    let matched = state.attempt(rule);
    let position = state.cursor().position();
    debug!(
        matched,
        position,
        depth = state.stack().len(),
        "parse finished"
    );
    ParseOutcome {
        matched,
        position,
        values: state.into_values(),
    }
}

/// Runs `rule` over the whole of `input` and returns its single value.
///
/// Trailing whitespace is allowed; anything else left unconsumed is an
/// error, as is a match that does not reduce to exactly one value.
///
/// # Errors
///
/// [`ParseError::NoMatch`] if the rule fails,
/// [`ParseError::NestingLimit`] if it fails after running into
/// [`ParserOptions::max_depth`], [`ParseError::TrailingInput`] if input remains after the match, and
/// [`ParseError::UnexpectedStackDepth`] if the stack does not hold exactly
/// one value.
pub fn parse_document(
    rule: &dyn Rule,
    input: &str,
    options: ParserOptions,
) -> Result<Value, ParseError> {
    let mut state = ParseState::new(input, options);
    if !state.attempt(rule) {
        debug!(input_len = input.len(), "document rejected");
        if state.hit_depth_limit() {
            return Err(ParseError::NestingLimit {
                max_depth: options.max_depth,
            });
        }
        return Err(ParseError::NoMatch);
    }

    state.skip_whitespace();
    if !state.cursor().is_at_end() {
        let position = state.cursor().position();
        debug!(position, "document has trailing input");
        return Err(ParseError::TrailingInput { position });
    }

    let mut values = state.into_values();
    let depth = values.len();
    match values.pop() {
        Some(value) if depth == 1 => {
            debug!(input_len = input.len(), "document accepted");
            Ok(value)
        }
        _ => Err(ParseError::UnexpectedStackDepth { depth }),
    }
}
