#![no_main]

use arbitrary::Arbitrary;
use jsonpeg::{Grammar, ParseError, ParserOptions, parse_with_options};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    allow_json_whitespace: bool,
    restore_whitespace_on_failure: bool,
    text: String,
}

fn parser(input: &Input) {
    let options = ParserOptions {
        allow_json_whitespace: input.allow_json_whitespace,
        restore_whitespace_on_failure: input.restore_whitespace_on_failure,
        // any rule failing without restoring the state panics here
        check_restoration: true,
        ..Default::default()
    };
    let grammar = Grammar::json();

    let outcome = parse_with_options(grammar.value().as_ref(), &input.text, options);
    assert!(outcome.position <= input.text.len());
    if outcome.matched {
        assert_eq!(outcome.values.len(), 1, "{outcome:?}");
    } else {
        assert!(outcome.values.is_empty(), "{outcome:?}");
    }

    match grammar.parse_document_with_options(&input.text, options) {
        Ok(value) => {
            let rendered = value.to_string();
            let reparsed = grammar.parse_document(&rendered);
            assert_eq!(reparsed.as_ref(), Ok(&value), "{rendered}");
        }
        Err(ParseError::UnexpectedStackDepth { depth }) => {
            panic!("grammar left {depth} values on the stack")
        }
        Err(
            ParseError::NoMatch
            | ParseError::TrailingInput { .. }
            | ParseError::NestingLimit { .. },
        ) => {}
    }
}

fuzz_target!(|input: Input| parser(&input));
