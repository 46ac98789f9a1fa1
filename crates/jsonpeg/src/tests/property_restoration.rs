use quickcheck::QuickCheck;

use super::arbitrary::GrammarNoise;
use crate::{Grammar, ParseError, ParserOptions, parse_with_options};

/// Property: no rule in the grammar fails without restoring the state.
///
/// `check_restoration` turns every violation into a panic, so the property
/// itself only has to check the shape of the outcome.
#[test]
fn grammar_restores_state_on_failure() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: GrammarNoise, allow_json_whitespace: bool, restore: bool) -> bool {
        let options = ParserOptions {
            allow_json_whitespace,
            restore_whitespace_on_failure: restore,
            check_restoration: true,
            ..Default::default()
        };
        let grammar = Grammar::json();
        let outcome = parse_with_options(grammar.value().as_ref(), &input.0, options);
        if outcome.matched {
            outcome.values.len() == 1 && outcome.position <= input.0.len()
        } else {
            outcome.values.is_empty()
        }
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(GrammarNoise, bool, bool) -> bool);
}

/// Property: whole-document parsing agrees with prefix parsing.
#[test]
fn document_agrees_with_prefix_parse() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: GrammarNoise) -> bool {
        let grammar = Grammar::json();
        let outcome = grammar.parse(&input.0);
        match grammar.parse_document(&input.0) {
            Ok(value) => outcome.into_value() == Some(value),
            Err(ParseError::NoMatch | ParseError::NestingLimit { .. }) => !outcome.matched,
            Err(ParseError::TrailingInput { position }) => {
                outcome.matched && position >= outcome.position && position < input.0.len()
            }
            Err(ParseError::UnexpectedStackDepth { .. }) => false,
        }
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(GrammarNoise) -> bool);
}
