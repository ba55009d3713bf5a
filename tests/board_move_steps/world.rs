//! Shared world state for board move BDD scenarios.

use std::sync::Arc;

use boardsync::board::{
    adapters::memory::{InMemoryNoticeSink, InMemoryTaskApi},
    domain::{Board, BoardMeta, Column, Task, TaskId},
    ports::NoticeSink,
    services::{BoardStore, MoveOutcome, OptimisticSync},
};
use eyre::eyre;
use mockable::DefaultClock;
use rstest::fixture;

/// Synchronizer type used by the BDD world.
pub type TestSync = OptimisticSync<InMemoryTaskApi, DefaultClock>;

/// Scenario world for board move behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
    pub api: Option<Arc<InMemoryTaskApi>>,
    pub notices: InMemoryNoticeSink,
    pub sync: Option<TestSync>,
    pub last_move: Option<MoveOutcome>,
}

impl BoardWorld {
    /// Adds a column holding tasks with the given titles in display order.
    pub fn add_column(&mut self, column_id: &str, titles: &[&str]) {
        let position = u32::try_from(self.columns.len()).unwrap_or(u32::MAX);
        self.columns
            .push(Column::new(column_id, column_id.to_uppercase(), position));
        for (order, title) in titles.iter().enumerate() {
            self.tasks
                .push(Task::new(task_id_for(title), *title, column_id, order));
        }
    }

    /// Starts the in-memory server and a synchronizer for the built board.
    pub fn start(&mut self) {
        let board = Board::new(
            BoardMeta::default(),
            self.columns.clone(),
            self.tasks.clone(),
        );
        let api = Arc::new(InMemoryTaskApi::with_board(board));
        let sink: Arc<dyn NoticeSink> = Arc::new(self.notices.clone());
        self.sync = Some(OptimisticSync::new(
            Arc::clone(&api),
            BoardStore::new(),
            sink,
            Arc::new(DefaultClock),
        ));
        self.api = Some(api);
    }

    /// Returns the running synchronizer.
    pub fn sync(&self) -> Result<&TestSync, eyre::Report> {
        self.sync
            .as_ref()
            .ok_or_else(|| eyre!("board has not been loaded in scenario world"))
    }

    /// Returns the in-memory server.
    pub fn api(&self) -> Result<&InMemoryTaskApi, eyre::Report> {
        self.api
            .as_deref()
            .ok_or_else(|| eyre!("server has not been started in scenario world"))
    }

    /// Returns the board currently shown.
    pub fn local_board(&self) -> Result<Arc<Board>, eyre::Report> {
        self.sync()?
            .store()
            .get()
            .ok_or_else(|| eyre!("store holds no board"))
    }
}

/// Derives a stable task id from a task title.
pub fn task_id_for(title: &str) -> TaskId {
    TaskId::new(title.to_lowercase().replace(' ', "-"))
}

/// Splits a comma separated list of titles.
pub fn split_titles(titles: &str) -> Vec<&str> {
    titles
        .split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .collect()
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    crate::test_helpers::init_test_logging();
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
