//! Error types for board domain validation and move reconciliation.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while validating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after normalization.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured length.
    #[error("task title has {actual} characters, at most {max} are allowed")]
    TitleTooLong {
        /// Configured maximum number of characters.
        max: usize,
        /// Number of characters in the rejected title.
        actual: usize,
    },

    /// A task refers to a column that is not on the board.
    #[error("task {task_id} refers to unknown column {column_id}")]
    DanglingColumn {
        /// Offending task.
        task_id: TaskId,
        /// Column the task claims to belong to.
        column_id: ColumnId,
    },

    /// The order values of a column are not exactly `0..n`.
    #[error("column {0} has gaps or duplicates in its task order")]
    SparseOrder(ColumnId),

    /// Two tasks share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// A move or rename whose target is no longer present in the local board.
///
/// Drift reflects a benign race between the gesture and the current
/// snapshot. It is never shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDrift {
    /// The referenced task is not on the board.
    #[error("task {0} is not on the board")]
    UnknownTask(TaskId),

    /// The destination column is not on the board.
    #[error("column {0} is not on the board")]
    UnknownColumn(ColumnId),

    /// No board has been loaded yet.
    #[error("no board has been loaded")]
    BoardNotLoaded,
}
