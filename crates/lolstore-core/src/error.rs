//! Error types for list-of-lists storage

use thiserror::Error;

/// Result type alias using [`StorageError`]
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised by storage operations and format constructors.
///
/// A lookup or removal miss is not an error: `get` falls back to the default
/// value and `remove` returns `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A container needs at least one axis
    #[error("shape must have at least one axis")]
    EmptyShape,

    /// Coordinate tuple length differs from the container rank
    #[error("coordinate has {got} axes but storage has rank {rank}")]
    RankMismatch {
        /// Container rank
        rank: usize,
        /// Length of the supplied coordinate
        got: usize,
    },

    /// Coordinate outside the declared shape
    #[error("index {index} out of bounds for axis {axis} of extent {extent}")]
    IndexOutOfBounds {
        /// Axis of the offending coordinate
        axis: usize,
        /// The offending coordinate
        index: usize,
        /// Extent of that axis
        extent: usize,
    },

    /// Operation only defined for one rank
    #[error("operation '{op}' requires rank {expected}, got rank {rank}")]
    UnsupportedRank {
        /// Operation name
        op: &'static str,
        /// Rank the operation supports
        expected: usize,
        /// Rank of the container
        rank: usize,
    },

    /// A node holds a value of the wrong nesting level
    #[error("corrupt tree at depth {depth}: {reason}")]
    CorruptTree {
        /// Nesting level, 0 being the root list
        depth: usize,
        /// What was found
        reason: String,
    },

    /// Malformed dense or compressed input
    #[error("invalid {format} input: {reason}")]
    InvalidFormat {
        /// Format name
        format: &'static str,
        /// What is wrong
        reason: String,
    },
}

impl StorageError {
    pub(crate) fn invalid(format: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format,
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(depth: usize, reason: impl Into<String>) -> Self {
        Self::CorruptTree {
            depth,
            reason: reason.into(),
        }
    }
}
