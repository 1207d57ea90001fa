//! Errors returned when a [`Cursor`][crate::Cursor] is used outside of its valid range.
//!
//! None of these are transient. Each one means the caller asked a cursor to do something that
//! its position doesn't allow, and the cursor is left exactly where it was.

use thiserror::Error;

/// A precondition on a cursor operation was violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The end cursor doesn't point at an element so there is nothing to read.
    #[error("cannot dereference the end cursor")]
    DerefEnd,
    /// The end cursor is already one past the last element.
    #[error("cannot advance the end cursor")]
    AdvanceEnd,
    /// The cursor is on the first element (or the tree is empty) so there is nothing before it.
    #[error("cannot retreat before the first element")]
    RetreatBegin,
}

/// A `Result` whose error is a cursor precondition violation.
pub type Result<T> = std::result::Result<T, Error>;
