//! Error types for quiver
//!
//! Not-found conditions (missing vertex or edge) are reported through
//! sentinel values (0 for vertex ids, an empty iteration, positive infinity
//! for weights) so traversal code stays branch-free at the call site. Errors
//! are reserved for misuse: invalid vertex ids at the boundary, querying
//! paths before computing them, or asking for a path to a vertex the search
//! never reached.

use std::fmt;

/// Errors that can occur during quiver operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    InvalidVertex(u32),

    VertexNotFound(u32),

    EdgeNotFound { u: u32, v: u32 },

    PathsNotComputed { operation: &'static str },

    Unreachable { source: u32, dest: u32 },

    NoDestination,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidVertex(id) => {
                write!(f, "invalid vertex id: {id} (vertex ids must be positive)")
            }
            GraphError::VertexNotFound(id) => write!(f, "vertex not found: {id}"),
            GraphError::EdgeNotFound { u, v } => write!(f, "edge not found: ({u}, {v})"),
            GraphError::PathsNotComputed { operation } => {
                write!(f, "paths not computed: call set_paths() before {operation}")
            }
            GraphError::Unreachable { source, dest } => {
                write!(f, "no path from {source} to {dest}")
            }
            GraphError::NoDestination => {
                write!(f, "no destination vertex was configured for this search")
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl GraphError {
    /// Create an error for querying path state before `set_paths()` ran
    pub fn paths_not_computed(operation: &'static str) -> Self {
        GraphError::PathsNotComputed { operation }
    }

    /// Create an error for a vertex the search never reached
    pub fn unreachable(source: u32, dest: u32) -> Self {
        GraphError::Unreachable { source, dest }
    }
}

/// Result type alias for quiver operations
pub type Result<T> = std::result::Result<T, GraphError>;
