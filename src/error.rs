//! The error type shared by the fallible containers and searches in this crate.

use thiserror::Error;

/// Why an operation on a container or search could not complete. A failed operation never
/// modifies the container it was called on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one element but the container has none.
    #[error("container is empty")]
    EmptyContainer,

    /// The requested index is past the end of the container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The length of the container at the time of the call.
        len: usize,
    },

    /// A value based search found no match.
    #[error("value not found")]
    NotFound,
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
