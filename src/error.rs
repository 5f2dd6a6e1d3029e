//! Error types for treeguide.

use std::fmt;

use crate::tree::NodeId;

/// Result type alias for treeguide operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for treeguide operations.
#[derive(Debug)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// A node was reached through more than one path during a single
    /// render call. The tree is structurally cyclic (or shares a node
    /// between parents); rendering aborts with no partial output, and
    /// retrying without changing the structure fails identically.
    StructuralCycle {
        /// The node that was dequeued a second time.
        node: NodeId,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::StructuralCycle { node } => {
                write!(f, "structural cycle: node {node} visited twice")
            }
        }
    }
}

impl std::error::Error for Error {}
