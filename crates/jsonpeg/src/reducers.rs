//! Rules that fold the values pushed by a sub-parse into one aggregate.
use tracing::{trace, warn};

use crate::{ParseState, Rule, RuleRef, Value, value::Map};

/// Runs its child, then replaces the key/value pairs it pushed with one
/// [`Value::Object`].
///
/// The child must push pairs as key then value, so popping yields the value
/// first. Pairs are inserted in pop order, i.e. from the last pair in the
/// input to the first; on a duplicate key the later insertion overwrites,
/// which keeps the pair that appeared first in the input.
///
/// If the child succeeds but the pushed values are not key/value pairs (an
/// odd count, or a key that is not a string) the reduction fails and the
/// state is rolled back.
#[derive(Debug, Clone)]
pub struct ComposeObject {
    child: RuleRef,
}

impl ComposeObject {
    /// An object reducer over `child`.
    #[must_use]
    pub fn new(child: RuleRef) -> Self {
        Self { child }
    }
}

impl Rule for ComposeObject {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        let entry = state.checkpoint();
        if !state.attempt(self.child.as_ref()) {
            return false;
        }

        let pushed = state.stack().len().saturating_sub(entry.depth());
        if pushed % 2 != 0 {
            warn!(pushed, "object reducer found an unpaired value");
            state.rollback(entry);
            return false;
        }

        let stack = state.stack_mut();
        let mut map = Map::new();
        while stack.len() > entry.depth() {
            let (Some(value), Some(Value::String(key))) = (stack.pop(), stack.pop()) else {
                warn!("object reducer found a non-string key");
                state.rollback(entry);
                return false;
            };
            map.insert(key, value);
        }

        trace!(entries = map.len(), "composed object");
        stack.push(Value::Object(map));
        true
    }
}

/// Runs its child, then replaces everything it pushed with one
/// [`Value::Array`] in push order.
#[derive(Debug, Clone)]
pub struct ComposeArray {
    child: RuleRef,
}

impl ComposeArray {
    /// An array reducer over `child`.
    #[must_use]
    pub fn new(child: RuleRef) -> Self {
        Self { child }
    }
}

impl Rule for ComposeArray {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        let entry = state.checkpoint();
        if !state.attempt(self.child.as_ref()) {
            return false;
        }

        let items = state.stack_mut().split_off(entry.depth());
        trace!(items = items.len(), "composed array");
        state.stack_mut().push(Value::Array(items));
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use super::*;
    use crate::{
        Char, Number, ParserOptions, Repetition, Sequence, StringLiteral, value::Array,
    };

    fn run(rule: &dyn Rule, input: &str) -> (bool, usize, Vec<Value>) {
        let mut state = ParseState::new(
            input,
            ParserOptions {
                check_restoration: true,
                ..Default::default()
            },
        );
        let matched = state.attempt(rule);
        let position = state.cursor().position();
        (matched, position, state.into_values())
    }

    fn s(text: &str) -> Value {
        Value::String(text.into())
    }

    fn num(n: &str) -> Value {
        Value::Number(n.into())
    }

    fn pairs() -> RuleRef {
        let pair = Sequence::new([
            StringLiteral::new().into_ref(),
            Char::new('=').into_ref(),
            StringLiteral::new().into_ref(),
        ])
        .into_ref();
        Repetition::new(pair).into_ref()
    }

    #[test]
    fn object_from_pairs() {
        let rule = ComposeObject::new(pairs());
        let (matched, position, values) = run(&rule, r#""a"="A" "b"="B""#);
        assert!(matched);
        assert_eq!(position, 15);
        let expected = Map::from([("a".into(), s("A")), ("b".into(), s("B"))]);
        assert_eq!(values, vec![Value::Object(expected)]);
    }

    #[test]
    fn object_duplicate_keeps_first_in_input() {
        let rule = ComposeObject::new(pairs());
        let (_, _, values) = run(&rule, r#""k"="1" "k"="2""#);
        assert_eq!(values, vec![Value::Object(Map::from([("k".into(), s("1"))]))]);
    }

    #[test]
    fn object_of_nothing_is_empty() {
        let rule = ComposeObject::new(pairs());
        assert_eq!(run(&rule, "x"), (true, 0, vec![Value::Object(Map::new())]));
    }

    #[test]
    fn object_leaves_values_below_entry() {
        let mut state = ParseState::new(r#"7 "a"="b""#, ParserOptions::default());
        assert!(state.attempt(&Number::new()));
        assert!(state.attempt(&ComposeObject::new(pairs())));
        assert_eq!(
            state.into_values(),
            vec![num("7"), Value::Object(Map::from([("a".into(), s("b"))]))]
        );
    }

    #[test]
    fn object_rejects_unpaired_values() {
        let rule = ComposeObject::new(
            Sequence::new([
                StringLiteral::new().into_ref(),
                StringLiteral::new().into_ref(),
                StringLiteral::new().into_ref(),
            ])
            .into_ref(),
        );
        assert_eq!(run(&rule, r#""a" "b" "c""#), (false, 0, vec![]));
    }

    #[test]
    fn object_rejects_non_string_key() {
        let rule = ComposeObject::new(
            Sequence::new([Number::new().into_ref(), StringLiteral::new().into_ref()]).into_ref(),
        );
        assert_eq!(run(&rule, r#"1 "a""#), (false, 0, vec![]));
    }

    #[test]
    fn array_keeps_input_order() {
        let rule = ComposeArray::new(Repetition::new(Number::new().into_ref()).into_ref());
        assert_eq!(
            run(&rule, "1 2 3"),
            (
                true,
                5,
                vec![Value::Array(vec![num("1"), num("2"), num("3")])]
            )
        );
    }

    #[test]
    fn array_of_nothing_is_empty() {
        let rule = ComposeArray::new(Repetition::new(Number::new().into_ref()).into_ref());
        assert_eq!(run(&rule, ""), (true, 0, vec![Value::Array(Array::new())]));
    }

    #[test]
    fn failed_child_pushes_nothing() {
        let rule = ComposeArray::new(
            Sequence::new([Number::new().into_ref(), Char::new(';').into_ref()]).into_ref(),
        );
        assert_eq!(run(&rule, "12,"), (false, 0, vec![]));
    }
}
