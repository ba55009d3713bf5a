//! Task cards and their column-local rank.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A task card on the board.
///
/// `order` is the zero-based rank of the task inside its column. Values are
/// dense per column and independent across columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    column_id: ColumnId,
    order: usize,
}

impl Task {
    /// Creates a task as described by the server.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        column_id: impl Into<ColumnId>,
        order: usize,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            column_id: column_id.into(),
            order,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the column holding the task.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the rank of the task inside its column.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns a copy of the task with a different rank.
    #[must_use]
    pub fn with_order(&self, order: usize) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }

    /// Returns a copy of the task placed in another column.
    ///
    /// The rank is left untouched; callers densify the destination column
    /// afterwards.
    #[must_use]
    pub fn with_column(&self, column_id: ColumnId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }

    /// Returns a copy of the task with a new title.
    #[must_use]
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}
