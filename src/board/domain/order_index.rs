//! Column orderings derived from the flat task collection.
//!
//! All functions are pure reads over a [`Board`]; none of them mutate or
//! fail.

use super::{Board, ColumnId, Task, TaskId};
use std::sync::Arc;

/// Returns the tasks of `column_id` in display order.
///
/// Tasks are sorted by ascending [`Task::order`]. The sort is stable, so
/// equal ranks (which a valid board never contains) keep their collection
/// order.
///
/// # Examples
///
/// ```
/// use boardsync::board::domain::{order_index, Board, BoardMeta, Column, ColumnId, Task};
///
/// let board = Board::new(
///     BoardMeta::default(),
///     vec![Column::new("todo", "Todo", 0)],
///     vec![Task::new("b", "B", "todo", 1), Task::new("a", "A", "todo", 0)],
/// );
/// let titles: Vec<_> = order_index::tasks_of(&board, &ColumnId::new("todo"))
///     .iter()
///     .map(|task| task.title().to_owned())
///     .collect();
/// assert_eq!(titles, ["A", "B"]);
/// ```
#[must_use]
pub fn tasks_of(board: &Board, column_id: &ColumnId) -> Vec<Arc<Task>> {
    let mut tasks: Vec<Arc<Task>> = board
        .tasks()
        .iter()
        .filter(|task| task.column_id() == column_id)
        .cloned()
        .collect();
    tasks.sort_by_key(|task| task.order());
    tasks
}

/// Reassigns ranks so that each task's order equals its position.
///
/// Tasks already holding the right rank are returned as the same `Arc`.
#[must_use]
pub fn densify(tasks: impl IntoIterator<Item = Arc<Task>>) -> Vec<Arc<Task>> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(position, task)| {
            if task.order() == position {
                task
            } else {
                Arc::new(task.with_order(position))
            }
        })
        .collect()
}

/// Returns whether the ranks of `column_id` are exactly `0..n`.
#[must_use]
pub fn is_dense(board: &Board, column_id: &ColumnId) -> bool {
    tasks_of(board, column_id)
        .iter()
        .enumerate()
        .all(|(position, task)| task.order() == position)
}

/// Returns the display position of a task inside its own column.
#[must_use]
pub fn position_of(board: &Board, task_id: &TaskId) -> Option<usize> {
    let task = board.task(task_id)?;
    tasks_of(board, task.column_id())
        .iter()
        .position(|candidate| candidate.id() == task_id)
}
