use alloc::vec::Vec;

use crate::Value;

/// Values pushed by terminals and folded by reducers during one parse run.
///
/// The last pushed value is the top. Rules only ever grow the stack above the
/// depth they found it at, so restoring a failed attempt is a truncation back
/// to that depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStack {
    values: Vec<Value>,
}

impl ValueStack {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if no values have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pushes `value` on top.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Removes and returns the top value.
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// The top value.
    #[must_use]
    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Drops every value above `depth`.
    pub fn truncate(&mut self, depth: usize) {
        self.values.truncate(depth);
    }

    /// Removes every value above `depth`, returned in push order.
    pub fn split_off(&mut self, depth: usize) -> Vec<Value> {
        if depth >= self.values.len() {
            return Vec::new();
        }
        self.values.split_off(depth)
    }

    /// The values in push order.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the stack, returning the values in push order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}
