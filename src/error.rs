//! Error types for merkle_root

use thiserror::Error;

/// Result type alias for merkle_root operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a Merkle root
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The leaf sequence had no elements. There is no root of zero leaves.
    #[error("Empty input: at least one leaf is required")]
    EmptyInput,

    /// A value is not hex, or does not decode to a 32-byte hash.
    #[error("Malformed input {value:?}: {reason}")]
    MalformedInput { value: String, reason: String },
}

impl Error {
    pub(crate) fn malformed(value: &str, reason: impl ToString) -> Self {
        Error::MalformedInput {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
