//! In-memory task API modelling the board server.
//!
//! Ordering follows the server rules: new tasks go to the end of their
//! column, a column change appends before reordering, requested ranks are
//! clamped, and deletions re-densify the emptied column.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardMeta, Column, ColumnId, MoveIntent, Task, TaskId, apply_move, order_index},
    ports::{CreateTaskRequest, TaskApi, TaskApiError, TaskApiResult, TaskPatch},
};

/// Initial content of an in-memory board.
///
/// # Examples
///
/// ```
/// use boardsync::board::adapters::memory::BoardSeed;
///
/// let seed = BoardSeed::default();
/// assert_eq!(seed.default_column.as_str(), "todo");
/// assert_eq!(seed.columns.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BoardSeed {
    /// Board metadata.
    pub meta: BoardMeta,
    /// Columns of the board.
    pub columns: Vec<Column>,
    /// Column receiving tasks created without an explicit column.
    pub default_column: ColumnId,
}

impl Default for BoardSeed {
    fn default() -> Self {
        Self {
            meta: BoardMeta::default(),
            columns: vec![
                Column::new("todo", "Todo", 0),
                Column::new("inprogress", "In Progress", 1),
                Column::new("done", "Done", 2),
            ],
            default_column: ColumnId::new("todo"),
        }
    }
}

impl BoardSeed {
    /// Creates a seed with the given columns. The first column by position
    /// becomes the default column.
    #[must_use]
    pub fn with_columns(columns: Vec<Column>) -> Self {
        let default_column = columns
            .iter()
            .min_by_key(|column| column.position())
            .map_or_else(|| ColumnId::new("todo"), |column| column.id().clone());
        Self {
            meta: BoardMeta::default(),
            columns,
            default_column,
        }
    }
}

/// Thread-safe in-memory task API.
#[derive(Debug, Clone)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug)]
struct InMemoryBoardState {
    board: Board,
    default_column: ColumnId,
    next_task_number: u64,
    failures: FailurePlan,
}

#[derive(Debug, Default, Clone, Copy)]
struct FailurePlan {
    fetch: bool,
    create: bool,
    update: bool,
    delete: bool,
}

impl Default for InMemoryTaskApi {
    fn default() -> Self {
        Self::with_seed(BoardSeed::default())
    }
}

impl InMemoryTaskApi {
    /// Creates an API serving the default three-column board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an API serving an empty board built from `seed`.
    #[must_use]
    pub fn with_seed(seed: BoardSeed) -> Self {
        let board = Board::new(seed.meta, seed.columns, Vec::new());
        Self::from_state(board, seed.default_column)
    }

    /// Creates an API serving an existing board snapshot.
    ///
    /// The first column by position becomes the default column.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        let default_column = board
            .columns()
            .first()
            .map_or_else(|| ColumnId::new("todo"), |column| column.id().clone());
        Self::from_state(board, default_column)
    }

    /// Loads a board from its JSON data-file representation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when the document is not a valid
    /// board snapshot.
    pub fn from_json(json: &str) -> TaskApiResult<Self> {
        let board: Board = serde_json::from_str(json).map_err(TaskApiError::transport)?;
        Ok(Self::with_board(board))
    }

    /// Exports the current board in its JSON data-file representation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when serialization or state
    /// access fails.
    pub fn to_json(&self) -> TaskApiResult<String> {
        let board = self.snapshot()?;
        serde_json::to_string(&board).map_err(TaskApiError::transport)
    }

    fn from_state(board: Board, default_column: ColumnId) -> Self {
        let next_task_number = highest_task_number(&board) + 1;
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState {
                board,
                default_column,
                next_task_number,
                failures: FailurePlan::default(),
            })),
        }
    }

    /// Returns the server-side board without going through the port.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when the state lock is poisoned.
    pub fn snapshot(&self) -> TaskApiResult<Board> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.board.clone())
    }

    /// Makes subsequent board fetches fail (or succeed again).
    pub fn fail_fetches(&self, fail: bool) {
        self.with_failures(|plan| plan.fetch = fail);
    }

    /// Makes subsequent task creations fail (or succeed again).
    pub fn fail_creates(&self, fail: bool) {
        self.with_failures(|plan| plan.create = fail);
    }

    /// Makes subsequent task updates fail (or succeed again).
    pub fn fail_updates(&self, fail: bool) {
        self.with_failures(|plan| plan.update = fail);
    }

    /// Makes subsequent task deletions fail (or succeed again).
    pub fn fail_deletes(&self, fail: bool) {
        self.with_failures(|plan| plan.delete = fail);
    }

    fn with_failures(&self, change: impl FnOnce(&mut FailurePlan)) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        change(&mut state.failures);
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> TaskApiError {
    TaskApiError::transport(std::io::Error::other(err.to_string()))
}

fn injected(operation: &str) -> TaskApiError {
    TaskApiError::transport(std::io::Error::other(format!(
        "injected {operation} failure"
    )))
}

/// Returns the largest `N` among `task-N` identifiers, or zero.
fn highest_task_number(board: &Board) -> u64 {
    board
        .tasks()
        .iter()
        .filter_map(|task| task.id().as_str().strip_prefix("task-"))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

fn find_task(board: &Board, task_id: &TaskId) -> TaskApiResult<Task> {
    board
        .task(task_id)
        .map(|task| Task::clone(task))
        .ok_or_else(|| TaskApiError::NotFound(task_id.clone()))
}

/// Moves a task the way the server does and returns the rewritten board.
fn reorder(board: &Board, task: &Task, patch: &TaskPatch) -> TaskApiResult<Board> {
    let target_column = patch.column_id.as_ref().unwrap_or_else(|| task.column_id());
    let column_changes = target_column != task.column_id();
    if column_changes && !board.has_column(target_column) {
        return Err(TaskApiError::UnknownColumn(target_column.clone()));
    }
    if !column_changes && patch.new_order.is_none() {
        return Ok(board.clone());
    }

    let dest_index = patch.new_order.unwrap_or(usize::MAX);
    let intent = MoveIntent::new(task.id().clone(), target_column.clone(), dest_index);
    apply_move(board, &intent).map_err(|drift| TaskApiError::Rejected(drift.to_string()))
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn fetch_board(&self) -> TaskApiResult<Board> {
        let state = self.state.read().map_err(poisoned)?;
        if state.failures.fetch {
            return Err(injected("fetch"));
        }
        Ok(state.board.clone())
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> TaskApiResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.failures.create {
            return Err(injected("create"));
        }

        let column_id = request
            .column_id
            .clone()
            .unwrap_or_else(|| state.default_column.clone());
        if !state.board.has_column(&column_id) {
            return Err(TaskApiError::UnknownColumn(column_id));
        }

        let order = order_index::tasks_of(&state.board, &column_id).len();
        let id = TaskId::new(format!("task-{}", state.next_task_number));
        let mut task = Task::new(id, request.title.clone(), column_id, order);
        if let Some(description) = &request.description {
            task = task.with_description(description.clone());
        }

        state.next_task_number += 1;
        state.board = state.board.with_task_appended(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task_id: &TaskId, patch: &TaskPatch) -> TaskApiResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.failures.update {
            return Err(injected("update"));
        }

        let current = find_task(&state.board, task_id)?;
        let mut board = reorder(&state.board, &current, patch)?;

        let mut edited = find_task(&board, task_id)?;
        if let Some(title) = &patch.title {
            edited = edited.with_title(title.clone());
        }
        if let Some(description) = &patch.description {
            edited = edited.with_description(description.clone());
        }
        board = board.with_replacements(vec![Arc::new(edited.clone())]);

        state.board = board;
        Ok(edited)
    }

    async fn delete_task(&self, task_id: &TaskId) -> TaskApiResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.failures.delete {
            return Err(injected("delete"));
        }

        state.board = state
            .board
            .without_task(task_id)
            .ok_or_else(|| TaskApiError::NotFound(task_id.clone()))?;
        Ok(())
    }
}
