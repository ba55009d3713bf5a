//! Apply-then-confirm-or-revert protocol for board changes.
//!
//! Moves are applied to the [`BoardStore`] before the server is asked to
//! persist them. A rejected move is not rolled back individually: the board
//! is fetched again and replaces every unconfirmed local change. Creation
//! and renaming are not optimistic; they touch the store only after the
//! server accepted them.
//!
//! Moves race. Each move commits immediately and issues its own request,
//! with no queueing, debouncing or cancellation. A confirmation arriving
//! after newer local changes never writes to the store.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::board::{
    domain::{Board, BoardDomainError, BoardDrift, MoveIntent, Task, TaskId, reconciler},
    ports::{
        CreateTaskRequest, ErrorNotice, NoticeKind, NoticeSink, TaskApi, TaskApiError, TaskPatch,
    },
    services::{BoardStore, SyncConfig},
};

/// Failures surfaced by [`OptimisticSync`].
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// Loading the board failed.
    #[error("failed to fetch board: {0}")]
    Fetch(#[source] TaskApiError),

    /// Creating a task failed.
    #[error("failed to create task: {0}")]
    Create(#[source] TaskApiError),

    /// Persisting a move failed.
    #[error("failed to move task {task_id}: {source}")]
    Move {
        /// Task whose move was rejected.
        task_id: TaskId,
        /// Underlying API failure.
        #[source]
        source: TaskApiError,
    },

    /// Persisting a title change failed.
    #[error("failed to rename task {task_id}: {source}")]
    Rename {
        /// Task whose title change was rejected.
        task_id: TaskId,
        /// Underlying API failure.
        #[source]
        source: TaskApiError,
    },

    /// User input was rejected before reaching the server.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Result type for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// A move already applied to the store and awaiting persistence.
#[derive(Debug, Clone)]
pub struct PendingMove {
    task_id: TaskId,
    patch: TaskPatch,
    board: Arc<Board>,
}

impl PendingMove {
    /// Returns the moved task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the update that will be sent to the server.
    #[must_use]
    pub const fn patch(&self) -> &TaskPatch {
        &self.patch
    }

    /// Returns the optimistic snapshot the move produced.
    #[must_use]
    pub const fn board(&self) -> &Arc<Board> {
        &self.board
    }
}

/// Result of committing a move.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// The move referred to something that is no longer on the board.
    /// Nothing was changed or sent.
    Ignored(BoardDrift),
    /// The server accepted the move.
    Persisted(Task),
    /// The server rejected the move and the board was reloaded.
    Reverted(SyncError),
    /// The server rejected the move and reloading the board failed too;
    /// the optimistic board stays in place.
    Unreconciled {
        /// Why the move was rejected.
        cause: SyncError,
        /// Why the corrective reload failed.
        reload: SyncError,
    },
}

/// Result of renaming a task.
#[derive(Debug, Clone)]
pub enum RenameOutcome {
    /// The task is not on the board; nothing was sent.
    Ignored(BoardDrift),
    /// The new title is invalid; nothing was sent.
    Invalid(BoardDomainError),
    /// The new title equals the current one; nothing was sent.
    Unchanged,
    /// The server accepted the new title.
    Renamed(Task),
    /// The server rejected the new title; the editor should show
    /// `previous_title` again.
    Reverted {
        /// Title before the edit.
        previous_title: String,
        /// Why the change was rejected.
        cause: SyncError,
    },
}

/// Orchestrates optimistic board changes against a [`TaskApi`].
pub struct OptimisticSync<A, C>
where
    A: TaskApi,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    clock: Arc<C>,
    notices: Arc<dyn NoticeSink>,
    store: BoardStore,
    config: SyncConfig,
}

impl<A, C> Clone for OptimisticSync<A, C>
where
    A: TaskApi,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            clock: Arc::clone(&self.clock),
            notices: Arc::clone(&self.notices),
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

impl<A, C> OptimisticSync<A, C>
where
    A: TaskApi,
    C: Clock + Send + Sync,
{
    /// Creates a synchronizer writing into `store` and reporting failures to
    /// `notices`.
    #[must_use]
    pub fn new(
        api: Arc<A>,
        store: BoardStore,
        notices: Arc<dyn NoticeSink>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            api,
            clock,
            notices,
            store,
            config: SyncConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the store this synchronizer writes to.
    #[must_use]
    pub const fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Fetches the authoritative board and replaces the store with it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Fetch`] when the fetch fails. A notice is
    /// reported and the store keeps its previous content.
    pub async fn load(&self) -> SyncResult<Arc<Board>> {
        match self.api.fetch_board().await {
            Ok(board) => {
                if let Err(err) = board.check_invariants() {
                    warn!(error = %err, "server board violates ordering invariants");
                }
                info!(tasks = board.task_count(), "loaded board");
                Ok(self.store.replace(board))
            }
            Err(source) => {
                let err = SyncError::Fetch(source);
                self.report(NoticeKind::BoardFetch, err.to_string());
                Err(err)
            }
        }
    }

    /// Applies a move to the store without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardDrift`] that prevented the move. The store is left
    /// untouched and nothing is reported.
    pub fn apply_move(&self, intent: MoveIntent) -> Result<PendingMove, BoardDrift> {
        let mut drift = BoardDrift::BoardNotLoaded;
        let applied = self.store.update_if(|board| {
            reconciler::apply_move(board, &intent)
                .map_err(|err| drift = err)
                .ok()
        });

        let Some(board) = applied else {
            debug!(task_id = %intent.task_id, reason = %drift, "ignoring move");
            return Err(drift);
        };
        debug!(
            task_id = %intent.task_id,
            column_id = %intent.dest_column_id,
            index = intent.dest_index,
            "applied optimistic move"
        );
        Ok(PendingMove {
            patch: TaskPatch::reposition(intent.dest_column_id, intent.dest_index),
            task_id: intent.task_id,
            board,
        })
    }

    /// Asks the server to persist an applied move.
    ///
    /// On rejection a notice is reported and the board is fetched again,
    /// replacing the optimistic snapshot and any later local change.
    pub async fn persist_move(&self, pending: PendingMove) -> MoveOutcome {
        match self.api.update_task(&pending.task_id, &pending.patch).await {
            Ok(task) => {
                debug!(task_id = %task.id(), "move confirmed");
                MoveOutcome::Persisted(task)
            }
            Err(source) => {
                let cause = SyncError::Move {
                    task_id: pending.task_id,
                    source,
                };
                self.report(
                    NoticeKind::MovePersist,
                    format!("{cause}; reloading the board"),
                );
                match self.load().await {
                    Ok(_) => MoveOutcome::Reverted(cause),
                    Err(reload) => MoveOutcome::Unreconciled { cause, reload },
                }
            }
        }
    }

    /// Applies a move optimistically and persists it.
    pub async fn commit_move(&self, intent: MoveIntent) -> MoveOutcome {
        match self.apply_move(intent) {
            Ok(pending) => self.persist_move(pending).await,
            Err(drift) => MoveOutcome::Ignored(drift),
        }
    }

    /// Creates a task and adds the server's version to the store.
    ///
    /// A reload that completed while the request was in flight may already
    /// hold the task; it is then replaced rather than added twice.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Domain`] when the title is invalid (nothing is
    /// sent or reported) and [`SyncError::Create`] when the server rejects
    /// the task (a notice is reported and the store is unchanged).
    pub async fn add_task(&self, request: CreateTaskRequest) -> SyncResult<Task> {
        let normalized = CreateTaskRequest {
            title: self.config.normalize_title(&request.title)?,
            ..request
        };

        match self.api.create_task(&normalized).await {
            Ok(task) => {
                debug!(task_id = %task.id(), column_id = %task.column_id(), "task created");
                self.store
                    .update(|board| board.with_task_upserted(task.clone()));
                Ok(task)
            }
            Err(source) => {
                let err = SyncError::Create(source);
                self.report(NoticeKind::TaskCreate, err.to_string());
                Err(err)
            }
        }
    }

    /// Changes the title of a task once the server accepted it.
    ///
    /// The store receives the title returned by the server.
    ///
    /// A rejected change is reported and the outcome carries the previous
    /// title; the board is not fetched again.
    pub async fn rename_task(&self, task_id: &TaskId, title: &str) -> RenameOutcome {
        let Some(board) = self.store.get() else {
            return RenameOutcome::Ignored(BoardDrift::BoardNotLoaded);
        };
        let Some(current) = board.task(task_id) else {
            return RenameOutcome::Ignored(BoardDrift::UnknownTask(task_id.clone()));
        };
        let normalized = match self.config.normalize_title(title) {
            Ok(normalized) => normalized,
            Err(err) => return RenameOutcome::Invalid(err),
        };
        if normalized == current.title() {
            return RenameOutcome::Unchanged;
        }
        let previous_title = current.title().to_owned();

        match self
            .api
            .update_task(task_id, &TaskPatch::retitle(normalized))
            .await
        {
            Ok(task) => {
                debug!(task_id = %task_id, "task renamed");
                self.store
                    .update_if(|latest| latest.with_task_title(task_id, task.title()));
                RenameOutcome::Renamed(task)
            }
            Err(source) => {
                let cause = SyncError::Rename {
                    task_id: task_id.clone(),
                    source,
                };
                self.report(NoticeKind::TaskRename, cause.to_string());
                RenameOutcome::Reverted {
                    previous_title,
                    cause,
                }
            }
        }
    }

    fn report(&self, kind: NoticeKind, message: String) {
        warn!(?kind, %message, "board operation failed");
        self.notices.report(ErrorNotice {
            kind,
            message,
            raised_at: self.clock.utc(),
        });
    }
}
