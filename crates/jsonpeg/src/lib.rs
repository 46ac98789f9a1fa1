//! A backtracking PEG combinator engine, and a JSON-subset grammar built on it.
//!
//! Grammars are graphs of [`Rule`]s: terminals ([`Char`], [`StringLiteral`],
//! [`Number`]) that consume input and push [`Value`]s onto a per-run stack,
//! combinators ([`Sequence`], [`Choice`], [`Optional`], [`Repetition`],
//! [`ForwardReference`]) that compose rules with ordered-choice semantics,
//! and reducers ([`ComposeObject`], [`ComposeArray`]) that fold the values a
//! sub-rule pushed into one aggregate.
//!
//! The subset has strings without escapes, numbers as plain digit runs,
//! objects and arrays. Numbers are kept as their digit text.
//!
//! ```rust
//! use jsonpeg::{parse_json, Value};
//!
//! let value = parse_json(r#"{"version": 17, "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(value.get("version"), Some(&Value::Number("17".into())));
//! assert!(parse_json(r#"{"a":}"#).is_err());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod combinators;
mod cursor;
mod error;
mod grammar;
mod options;
mod reducers;
mod rule;
mod stack;
mod terminals;
mod value;

#[cfg(test)]
mod tests;

pub use combinators::{Choice, ForwardReference, Optional, Repetition, Sequence};
pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::Grammar;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use reducers::{ComposeArray, ComposeObject};
pub use rule::{
    Checkpoint, ParseOutcome, ParseState, Rule, RuleRef, parse, parse_document, parse_with_options,
};
pub use stack::ValueStack;
pub use terminals::{Char, Number, StringLiteral};
pub use value::{Array, Map, Value};

/// Parses `input` as one JSON-subset document.
///
/// Builds a fresh [`Grammar`] on every call; hold on to a [`Grammar`] when
/// parsing many documents.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not exactly one value,
/// optionally surrounded by whitespace.
pub fn parse_json(input: &str) -> Result<Value, ParseError> {
    Grammar::json().parse_document(input)
}
