//! The JSON-subset grammar.
//!
//! ```text
//! VALUE   = STRING / NUMBER / OBJECT / ARRAY
//! PAIR    = STRING ":" VALUE
//! PAIRS   = (PAIR ("," PAIR)*)?
//! OBJECT  = "{" PAIRS "}"
//! VALUES  = (VALUE ("," VALUE)*)?
//! ARRAY   = "[" VALUES "]"
//! ```
//!
//! OBJECT and ARRAY reach back to VALUE through [`ForwardReference`]s that
//! hold a weak pointer to the grammar, so the graph has no strong cycle. The
//! graph is freed once the last [`Grammar`] and the last rule handle taken
//! from one are dropped.
use alloc::sync::{Arc, Weak};
use core::fmt;

use crate::{
    Char, Choice, ComposeArray, ComposeObject, ForwardReference, Number, Optional, ParseError,
    ParseOutcome, ParseState, ParserOptions, Repetition, Rule, RuleRef, Sequence, StringLiteral,
    Value, rule,
};

#[derive(Debug)]
struct JsonRules {
    value: RuleRef,
    object: RuleRef,
    array: RuleRef,
}

impl JsonRules {
    fn build(this: &Weak<JsonRules>) -> Self {
        let value_ref = || {
            let this = this.clone();
            ForwardReference::new(move || this.upgrade().map(|rules| Arc::clone(&rules.value)))
                .into_ref()
        };
        // `"," item`
        let comma_then = |item: RuleRef| Sequence::new([Char::new(',').into_ref(), item]).into_ref();
        // `(item ("," item)*)?`
        let separated = |item: RuleRef| {
            let tail = Repetition::new(comma_then(Arc::clone(&item))).into_ref();
            Optional::new(Sequence::new([item, tail]).into_ref()).into_ref()
        };

        let pair = Sequence::new([
            StringLiteral::new().into_ref(),
            Char::new(':').into_ref(),
            value_ref(),
        ])
        .into_ref();
        let object = ComposeObject::new(
            Sequence::new([Char::new('{').into_ref(), separated(pair), Char::new('}').into_ref()])
                .into_ref(),
        )
        .into_ref();

        let array = ComposeArray::new(
            Sequence::new([
                Char::new('[').into_ref(),
                separated(value_ref()),
                Char::new(']').into_ref(),
            ])
            .into_ref(),
        )
        .into_ref();

        let value = Choice::new([
            StringLiteral::new().into_ref(),
            Number::new().into_ref(),
            Arc::clone(&object),
            Arc::clone(&array),
        ])
        .into_ref();

        Self {
            value,
            object,
            array,
        }
    }
}

/// A rule handle that keeps the whole grammar graph alive.
///
/// The forward references inside the graph only hold weak pointers, so a bare
/// clone of one of its rules would stop matching nested values once the
/// grammar is gone.
struct GrammarRule {
    rules: Arc<JsonRules>,
    select: fn(&JsonRules) -> &RuleRef,
}

impl fmt::Debug for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt((self.select)(&self.rules), f)
    }
}

impl Rule for GrammarRule {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        state.attempt((self.select)(&self.rules).as_ref())
    }
}

/// A built JSON-subset grammar.
///
/// Building is cheap but not free; keep a `Grammar` around to parse many
/// documents. Handles are cheap to clone and may be shared across threads.
///
/// # Examples
///
/// ```rust
/// use jsonpeg::{Grammar, Value};
///
/// let grammar = Grammar::json();
/// let value = grammar.parse_document(r#"{"ids": [1, 2]}"#).unwrap();
/// assert_eq!(
///     value.get("ids"),
///     Some(&Value::Array(vec![
///         Value::Number("1".into()),
///         Value::Number("2".into()),
///     ]))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Arc<JsonRules>,
}

impl Grammar {
    /// Builds the grammar.
    #[must_use]
    pub fn json() -> Self {
        Self {
            rules: Arc::new_cyclic(JsonRules::build),
        }
    }

    fn handle(&self, select: fn(&JsonRules) -> &RuleRef) -> RuleRef {
        GrammarRule {
            rules: Arc::clone(&self.rules),
            select,
        }
        .into_ref()
    }

    /// The VALUE rule, the grammar's entry point.
    ///
    /// Handles keep the grammar alive and stay usable after every `Grammar`
    /// is dropped.
    #[must_use]
    pub fn value(&self) -> RuleRef {
        self.handle(|rules| &rules.value)
    }

    /// The OBJECT rule.
    #[must_use]
    pub fn object(&self) -> RuleRef {
        self.handle(|rules| &rules.object)
    }

    /// The ARRAY rule.
    #[must_use]
    pub fn array(&self) -> RuleRef {
        self.handle(|rules| &rules.array)
    }

    /// Runs VALUE from the start of `input`, which may match only a prefix.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseOutcome {
        rule::parse(self.rules.value.as_ref(), input)
    }

    /// Parses the whole of `input` as one value with default options.
    ///
    /// # Errors
    ///
    /// See [`parse_document`](crate::parse_document).
    pub fn parse_document(&self, input: &str) -> Result<Value, ParseError> {
        self.parse_document_with_options(input, ParserOptions::default())
    }

    /// Parses the whole of `input` as one value.
    ///
    /// # Errors
    ///
    /// See [`parse_document`](crate::parse_document).
    pub fn parse_document_with_options(
        &self,
        input: &str,
        options: ParserOptions,
    ) -> Result<Value, ParseError> {
        rule::parse_document(self.rules.value.as_ref(), input, options)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::json()
    }
}
