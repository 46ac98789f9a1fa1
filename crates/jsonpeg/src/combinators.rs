//! Structural rules: sequencing, ordered choice, repetition and deferred
//! references.
//!
//! Combinators never touch the input themselves. Backtracking is built from
//! [`Checkpoint`]s: a combinator that can fail after a child succeeded saves
//! one on entry and rolls back to it, which undoes both the cursor movement
//! and every value the earlier children pushed.
//!
//! [`Checkpoint`]: crate::Checkpoint
use alloc::{boxed::Box, sync::Weak, vec::Vec};
use core::fmt;

use tracing::{trace, warn};

use crate::{ParseState, Rule, RuleRef};

/// Matches every child in order, or nothing.
#[derive(Debug, Clone)]
pub struct Sequence {
    children: Vec<RuleRef>,
}

impl Sequence {
    /// A sequence of `children`.
    pub fn new(children: impl IntoIterator<Item = RuleRef>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }
}

impl Rule for Sequence {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        let entry = state.checkpoint();
        for (index, child) in self.children.iter().enumerate() {
            if !state.attempt(child.as_ref()) {
                trace!(
                    position = entry.position(),
                    depth = entry.depth(),
                    failed_child = index,
                    "sequence rolled back"
                );
                state.rollback(entry);
                return false;
            }
        }
        true
    }
}

/// Ordered choice: the first child that matches wins.
#[derive(Debug, Clone)]
pub struct Choice {
    children: Vec<RuleRef>,
}

impl Choice {
    /// A choice between `children`, tried in order.
    pub fn new(children: impl IntoIterator<Item = RuleRef>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }
}

impl Rule for Choice {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        // each failing child restores itself, so the next one starts clean
        self.children
            .iter()
            .any(|child| state.attempt(child.as_ref()))
    }
}

/// Matches its child or nothing; always succeeds.
#[derive(Debug, Clone)]
pub struct Optional {
    child: RuleRef,
}

impl Optional {
    /// An optional `child`.
    #[must_use]
    pub fn new(child: RuleRef) -> Self {
        Self { child }
    }
}

impl Rule for Optional {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        state.attempt(self.child.as_ref());
        true
    }
}

/// Matches its child as many times as possible; always succeeds.
///
/// Matching is greedy and never gives back accumulated iterations. An
/// iteration that succeeds without consuming input ends the loop.
#[derive(Debug, Clone)]
pub struct Repetition {
    child: RuleRef,
}

impl Repetition {
    /// Zero or more `child`.
    #[must_use]
    pub fn new(child: RuleRef) -> Self {
        Self { child }
    }
}

impl Rule for Repetition {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        loop {
            let before = state.cursor().position();
            if !state.attempt(self.child.as_ref()) {
                return true;
            }
            if state.cursor().position() == before {
                trace!(position = before, "repetition made no progress");
                return true;
            }
        }
    }
}

type Supplier = dyn Fn() -> Option<RuleRef> + Send + Sync;

/// Delegates to a rule resolved at parse time.
///
/// This is how a rule refers to one defined later, or to itself: the
/// supplier is only called when the reference is parsed, by which point the
/// grammar graph is complete. A supplier returning `None` (its target has
/// been dropped) makes the reference fail.
///
/// Each resolution counts as one level of nesting against
/// [`ParserOptions::max_depth`]; a reference reached at the limit fails
/// without calling its target.
///
/// ```rust
/// use std::sync::{Arc, Weak};
///
/// use jsonpeg::{parse, Char, Choice, ForwardReference, Rule, Sequence};
///
/// // NESTED = "(" NESTED ")" / "x"
/// let nested = Arc::new_cyclic(|this: &Weak<Choice>| {
///     Choice::new([
///         Sequence::new([
///             Char::new('(').into_ref(),
///             ForwardReference::to(this.clone()).into_ref(),
///             Char::new(')').into_ref(),
///         ])
///         .into_ref(),
///         Char::new('x').into_ref(),
///     ])
/// });
/// assert_eq!(parse(&nested, "((x))").position, 5);
/// assert!(!parse(&nested, "((x)").matched);
/// ```
///
/// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
pub struct ForwardReference {
    supplier: Box<Supplier>,
}

impl ForwardReference {
    /// A reference resolved by calling `supplier` on every parse.
    pub fn new<F>(supplier: F) -> Self
    where
        F: Fn() -> Option<RuleRef> + Send + Sync + 'static,
    {
        Self {
            supplier: Box::new(supplier),
        }
    }

    /// A reference to the rule behind `target`.
    ///
    /// Holding a weak pointer lets a rule reach one of its ancestors without
    /// forming a reference cycle.
    #[must_use]
    pub fn to(target: Weak<dyn Rule>) -> Self {
        Self::new(move || target.upgrade())
    }
}

impl fmt::Debug for ForwardReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the target is not resolved here: printing it could recurse forever
        f.debug_struct("ForwardReference").finish_non_exhaustive()
    }
}

impl Rule for ForwardReference {
    fn parse(&self, state: &mut ParseState<'_>) -> bool {
        match (self.supplier)() {
            Some(rule) => {
                if !state.enter() {
                    warn!(
                        position = state.cursor().position(),
                        max_depth = state.options().max_depth,
                        "nesting limit reached"
                    );
                    return false;
                }
                let matched = state.attempt(rule.as_ref());
                state.leave();
                matched
            }
            None => {
                warn!(
                    position = state.cursor().position(),
                    "forward reference target is gone"
                );
                false
            }
        }
    }
}
