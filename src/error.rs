//! Error type for the checked symbol-table operations

#![warn(missing_docs)]

use core::fmt::{self, Display};

//-----------------------------------------------------------------------------------------------//

/// Error returned by the checked operations of `Map` and `StringMap`.
///
/// The unchecked operations signal the same conditions through `Option` return values; the
/// `try_` variants are for callers that want the condition as a proper error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree holds no keys, so there is no first or last key to return.
    Empty,
    /// No value was supplied for a key. Storing "no value" is the classical symbol-table
    /// convention for deleting a key, and these trees do not support removal.
    MissingValue,
}

impl Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Empty => write!(f, "tree is empty"),
            TreeError::MissingValue => {
                write!(f, "no value supplied, and removal is not supported")
            }
        }
    }
}

impl core::error::Error for TreeError {}
