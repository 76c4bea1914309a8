//! Error types for board operations

use thiserror::Error;

use crate::core::models::Id;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Reasons a board operation left the board untouched.
///
/// None of these reach the user; the presentation layer logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: Id },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: Id },

    /// Id names neither a column nor a task
    #[error("no column or task with id {id}")]
    UnknownTarget { id: Id },

    /// Source and destination are the same item
    #[error("{id} cannot be moved onto itself")]
    SameItem { id: Id },
}
