//! Protocol error types.

use thiserror::Error;

/// A framed line that cannot be interpreted as a protocol message.
///
/// Malformed lines are recoverable: the caller logs them and moves on to the
/// next line. None of these variants are produced by reading past the end of
/// the input; every scan stops at the line length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line was empty after framing.
    #[error("empty line")]
    Empty,

    /// Line has no space, so no command or numeric token can follow.
    #[error("no space delimiter in line")]
    NoSpace,

    /// Line starts with `:` but the sender prefix is empty.
    #[error("empty sender prefix")]
    EmptyPrefix,

    /// Nothing follows the first space.
    #[error("missing command or numeric reply")]
    MissingVerb,

    /// No trailing `:` parameter and no middle parameter to stand in for it.
    #[error("missing trailing parameter")]
    MissingTrailing,
}
