//! Move reconciliation: the state transition behind drag-and-drop.
//!
//! [`apply_move`] takes a snapshot and a [`MoveIntent`] and produces the
//! snapshot the user should see once the move lands. Both affected columns
//! come back densified; every other task is shared with the input.

use super::{Board, BoardDrift, ColumnId, Task, TaskId, order_index};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A requested relocation of a task, as produced by a drop gesture.
///
/// The source column is not part of the intent. It is read from the board
/// when the move is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Task being moved.
    pub task_id: TaskId,
    /// Column receiving the task.
    pub dest_column_id: ColumnId,
    /// Requested position in the destination column; clamped to its length.
    pub dest_index: usize,
}

impl MoveIntent {
    /// Creates a move intent.
    #[must_use]
    pub fn new(
        task_id: impl Into<TaskId>,
        dest_column_id: impl Into<ColumnId>,
        dest_index: usize,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            dest_column_id: dest_column_id.into(),
            dest_index,
        }
    }
}

/// Applies a move to a board snapshot.
///
/// For a move inside one column the task is removed from and reinserted into
/// a single working sequence, so the destination index is interpreted
/// against the column without the moving task.
///
/// # Errors
///
/// Returns [`BoardDrift::UnknownTask`] when the task is not on the board and
/// [`BoardDrift::UnknownColumn`] when the destination column does not exist.
/// The input board is left as is in both cases.
///
/// # Examples
///
/// ```
/// use boardsync::board::domain::{
///     order_index, reconciler::{apply_move, MoveIntent}, Board, BoardMeta, Column, ColumnId,
///     Task,
/// };
///
/// let board = Board::new(
///     BoardMeta::default(),
///     vec![Column::new("todo", "Todo", 0)],
///     vec![
///         Task::new("a", "A", "todo", 0),
///         Task::new("b", "B", "todo", 1),
///         Task::new("c", "C", "todo", 2),
///     ],
/// );
/// let moved = apply_move(&board, &MoveIntent::new("b", "todo", 0)).expect("task is on the board");
/// let ids: Vec<_> = order_index::tasks_of(&moved, &ColumnId::new("todo"))
///     .iter()
///     .map(|task| task.id().to_string())
///     .collect();
/// assert_eq!(ids, ["b", "a", "c"]);
/// ```
pub fn apply_move(board: &Board, intent: &MoveIntent) -> Result<Board, BoardDrift> {
    let moving = board
        .task(&intent.task_id)
        .ok_or_else(|| BoardDrift::UnknownTask(intent.task_id.clone()))?;
    if !board.has_column(&intent.dest_column_id) {
        return Err(BoardDrift::UnknownColumn(intent.dest_column_id.clone()));
    }

    let source_column = moving.column_id().clone();
    let without_moving = |column_id: &ColumnId| -> Vec<Arc<Task>> {
        order_index::tasks_of(board, column_id)
            .into_iter()
            .filter(|task| task.id() != moving.id())
            .collect()
    };

    let relocated = if source_column == intent.dest_column_id {
        Arc::clone(moving)
    } else {
        Arc::new(moving.with_column(intent.dest_column_id.clone()))
    };
    let mut destination = without_moving(&intent.dest_column_id);
    let index = intent.dest_index.min(destination.len());
    destination.insert(index, relocated);

    let mut replacements = order_index::densify(destination);
    if source_column != intent.dest_column_id {
        replacements.extend(order_index::densify(without_moving(&source_column)));
    }

    Ok(board.with_replacements(replacements))
}

/// Applies a move, returning the input board unchanged on drift.
#[must_use]
pub fn apply_move_or_keep(board: &Board, intent: &MoveIntent) -> Board {
    apply_move(board, intent).unwrap_or_else(|_| board.clone())
}
