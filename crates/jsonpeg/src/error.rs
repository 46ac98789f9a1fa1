use thiserror::Error;

/// Why a whole-document parse was rejected.
///
/// Rule failures inside the engine are plain `false` results; this type only
/// describes the top-level verdict, without any expected-token diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The entry rule did not match.
    #[error("input does not match the grammar")]
    NoMatch,
    /// The entry rule matched a prefix of the input.
    #[error("unexpected trailing input at byte {position}")]
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        position: usize,
    },
    /// The entry rule did not match, and at least one attempt was cut off by
    /// [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("input nests deeper than the limit of {max_depth}")]
    NestingLimit {
        /// The limit that was reached.
        max_depth: usize,
    },
    /// The entry rule matched but did not reduce to exactly one value.
    #[error("expected one value on the stack, found {depth}")]
    UnexpectedStackDepth {
        /// Number of values left on the stack.
        depth: usize,
    },
}
