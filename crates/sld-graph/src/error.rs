//! Graph-specific error types.

use thiserror::Error;

/// Graph construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two components share the same id.
    #[error("Duplicate component id: {id}")]
    DuplicateComponent { id: String },

    /// A connection refers to a component that doesn't exist.
    #[error("Component not found: {id} (connection {from} -> {to})")]
    ComponentNotFound { id: String, from: String, to: String },

    /// More components than a compact index can address.
    #[error("Graph too large: {count} components")]
    TooLarge { count: usize },
}
