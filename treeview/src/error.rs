//! Tree error types

use crate::node::NodeId;

/// Errors reported by tree construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Allocation failed. The tree is left exactly as it was before the call.
    #[error("out of memory")]
    OutOfMemory,

    /// Invalid argument, such as an illegal relationship for the relation node.
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// A field array did not match the schema positionally.
    #[error("field {index} does not match schema: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        /// Position in the supplied field array.
        index: usize,
        /// Field name the schema defines at this position.
        expected: String,
        /// Field name the caller supplied.
        found: String,
    },

    /// The node handle refers to a node that has been deleted.
    #[error("stale node handle {0:?}")]
    StaleNode(NodeId),
}

impl TreeError {
    /// Creates a new bad parameter error.
    pub fn bad_parameter(message: impl Into<String>) -> Self {
        Self::BadParameter(message.into())
    }

    /// Returns `true` if the error indicates a caller defect rather than a
    /// resource failure.
    pub fn is_bad_parameter(&self) -> bool {
        !matches!(self, Self::OutOfMemory)
    }
}

impl From<std::collections::TryReserveError> for TreeError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
