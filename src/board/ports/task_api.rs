//! Port for the server-side task API.
//!
//! The transport behind this port is not the concern of this crate. An HTTP
//! client, an IPC bridge, or the in-memory adapter can implement it.

use crate::board::domain::{Board, ColumnId, Task, TaskId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task API operations.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
    /// Optional task description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Column to create the task in; the server default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

impl CreateTaskRequest {
    /// Creates a request for a task in the server's default column.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            column_id: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Targets a specific column.
    #[must_use]
    pub fn in_column(mut self, column_id: impl Into<ColumnId>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }
}

/// Partial update of a task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Column to move the task into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    /// Requested rank inside the (possibly new) column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_order: Option<usize>,
}

impl TaskPatch {
    /// Creates a patch relocating a task.
    #[must_use]
    pub fn reposition(column_id: impl Into<ColumnId>, new_order: usize) -> Self {
        Self {
            column_id: Some(column_id.into()),
            new_order: Some(new_order),
            ..Self::default()
        }
    }

    /// Creates a patch renaming a task.
    #[must_use]
    pub fn retitle(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Server task API contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Returns the authoritative board snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskApiError`] on any non-success outcome.
    async fn fetch_board(&self) -> TaskApiResult<Board>;

    /// Creates a task. The server assigns its id, column, and rank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::UnknownColumn`] when the requested column does
    /// not exist, or another [`TaskApiError`] on transport failure.
    async fn create_task(&self, request: &CreateTaskRequest) -> TaskApiResult<Task>;

    /// Applies a partial update and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::NotFound`] when the task does not exist.
    async fn update_task(&self, task_id: &TaskId, patch: &TaskPatch) -> TaskApiResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::NotFound`] when the task does not exist.
    async fn delete_task(&self, task_id: &TaskId) -> TaskApiResult<()>;
}

/// Errors returned by task API implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskApiError {
    /// The task does not exist on the server.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The column does not exist on the server.
    #[error("column does not exist: {0}")]
    UnknownColumn(ColumnId),

    /// The server refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskApiError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
