//! Board snapshots.
//!
//! A [`Board`] is an immutable snapshot: every change produces a new value.
//! Tasks are shared behind [`Arc`] so a snapshot derived from another one
//! reuses every task it did not touch.

use super::{BoardDomainError, BoardId, Column, ColumnId, Task, TaskId, order_index};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Identity of the board shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMeta {
    /// Board identifier.
    pub id: BoardId,
    /// Board display name.
    pub name: String,
}

impl BoardMeta {
    /// Creates board metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(id),
            name: name.into(),
        }
    }
}

impl Default for BoardMeta {
    fn default() -> Self {
        Self::new("board-1", "Kanban")
    }
}

/// Columns and tasks of one board.
///
/// Columns are kept sorted by position. Tasks form an unordered collection;
/// display order inside a column comes from [`Task::order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardView")]
pub struct Board {
    #[serde(rename = "board")]
    meta: BoardMeta,
    columns: Vec<Column>,
    tasks: Vec<Arc<Task>>,
}

/// Wire shape of a board snapshot before column sorting.
#[derive(Deserialize)]
struct BoardView {
    #[serde(default)]
    board: BoardMeta,
    columns: Vec<Column>,
    #[serde(default)]
    tasks: Vec<Arc<Task>>,
}

impl From<BoardView> for Board {
    fn from(view: BoardView) -> Self {
        Self::from_shared(view.board, view.columns, view.tasks)
    }
}

impl Board {
    /// Creates a board, sorting columns by position.
    #[must_use]
    pub fn new(meta: BoardMeta, columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self::from_shared(meta, columns, tasks.into_iter().map(Arc::new).collect())
    }

    fn from_shared(meta: BoardMeta, mut columns: Vec<Column>, tasks: Vec<Arc<Task>>) -> Self {
        columns.sort_by_key(Column::position);
        Self {
            meta,
            columns,
            tasks,
        }
    }

    /// Returns the board metadata.
    #[must_use]
    pub const fn meta(&self) -> &BoardMeta {
        &self.meta
    }

    /// Returns the columns ordered by position.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Looks up a column by identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Returns whether the board has a column with the given identifier.
    #[must_use]
    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    /// Returns a board with `task` appended to the collection.
    #[must_use]
    pub fn with_task_appended(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(Arc::new(task));
        self.with_tasks(tasks)
    }

    /// Returns a board holding `task`, replacing a task with the same
    /// identifier in place or appending it when there is none.
    #[must_use]
    pub fn with_task_upserted(&self, task: Task) -> Self {
        if self.task(task.id()).is_some() {
            self.with_replacements(vec![Arc::new(task)])
        } else {
            self.with_task_appended(task)
        }
    }

    /// Returns a board where the title of `id` is replaced.
    ///
    /// Returns `None` when the task is not on the board.
    #[must_use]
    pub fn with_task_title(&self, id: &TaskId, title: &str) -> Option<Self> {
        let current = self.task(id)?;
        let renamed = Arc::new(current.with_title(title));
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    Arc::clone(&renamed)
                } else {
                    Arc::clone(task)
                }
            })
            .collect();
        Some(self.with_tasks(tasks))
    }

    /// Returns a board without the task `id`, re-densifying its column.
    ///
    /// Returns `None` when the task is not on the board.
    #[must_use]
    pub fn without_task(&self, id: &TaskId) -> Option<Self> {
        let removed = self.task(id)?;
        let column_id = removed.column_id().clone();
        let remaining: Vec<Arc<Task>> = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        let stripped = self.with_tasks(remaining);
        let column = order_index::densify(order_index::tasks_of(&stripped, &column_id));
        Some(stripped.with_replacements(column))
    }

    /// Replaces the task collection while keeping metadata and columns.
    pub(crate) fn with_tasks(&self, tasks: Vec<Arc<Task>>) -> Self {
        Self {
            meta: self.meta.clone(),
            columns: self.columns.clone(),
            tasks,
        }
    }

    /// Swaps in the given tasks by identifier, keeping collection order.
    ///
    /// Tasks not named in `replacements` keep their `Arc`.
    pub(crate) fn with_replacements(&self, replacements: Vec<Arc<Task>>) -> Self {
        let by_id: HashMap<&TaskId, &Arc<Task>> = replacements
            .iter()
            .map(|task| (task.id(), task))
            .collect();
        let tasks = self
            .tasks
            .iter()
            .map(|task| Arc::clone(by_id.get(task.id()).copied().unwrap_or(task)))
            .collect();
        self.with_tasks(tasks)
    }

    /// Verifies the board invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a duplicate task identifier, a
    /// task referring to an unknown column, or a column whose order values
    /// are not exactly `0..n`.
    pub fn check_invariants(&self) -> Result<(), BoardDomainError> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id().clone()));
            }
            if !self.has_column(task.column_id()) {
                return Err(BoardDomainError::DanglingColumn {
                    task_id: task.id().clone(),
                    column_id: task.column_id().clone(),
                });
            }
        }

        for column in &self.columns {
            if !order_index::is_dense(self, column.id()) {
                return Err(BoardDomainError::SparseOrder(column.id().clone()));
            }
        }
        Ok(())
    }
}
