//! The single holder of the current board snapshot.

use std::sync::Arc;
use tokio::sync::watch;

use crate::board::domain::Board;

/// Holds the current authoritative-or-optimistic board.
///
/// Every change swaps the whole snapshot, so readers always observe a
/// consistent board. Clones share the same snapshot. The store starts empty
/// and stays empty until the first successful fetch.
///
/// # Examples
///
/// ```
/// use boardsync::board::domain::{Board, BoardMeta, Column};
/// use boardsync::board::services::BoardStore;
///
/// let store = BoardStore::new();
/// assert!(store.get().is_none());
///
/// store.replace(Board::new(BoardMeta::default(), vec![Column::new("todo", "Todo", 0)], vec![]));
/// assert!(store.is_loaded());
/// ```
#[derive(Debug, Clone)]
pub struct BoardStore {
    snapshot: Arc<watch::Sender<Option<Arc<Board>>>>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self {
            snapshot: Arc::new(sender),
        }
    }

    /// Returns the current snapshot, or `None` before the first load.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Board>> {
        self.snapshot.borrow().clone()
    }

    /// Returns whether a board has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot.borrow().is_some()
    }

    /// Replaces the snapshot wholesale and returns the stored board.
    pub fn replace(&self, board: Board) -> Arc<Board> {
        let shared = Arc::new(board);
        self.snapshot.send_replace(Some(Arc::clone(&shared)));
        shared
    }

    /// Stores the result of applying `transform` to the current snapshot.
    ///
    /// Returns the new snapshot, or `None` when no board is loaded.
    pub fn update<F>(&self, transform: F) -> Option<Arc<Board>>
    where
        F: FnOnce(&Board) -> Board,
    {
        self.update_if(|board| Some(transform(board)))
    }

    /// Stores the result of `transform` when it produces a board.
    ///
    /// Returns the new snapshot, or `None` when no board is loaded or the
    /// transform declined to change it. Subscribers are only notified when
    /// the snapshot changes.
    pub fn update_if<F>(&self, transform: F) -> Option<Arc<Board>>
    where
        F: FnOnce(&Board) -> Option<Board>,
    {
        let mut updated = None;
        self.snapshot.send_if_modified(|slot| {
            let Some(next) = slot.as_deref().and_then(transform) else {
                return false;
            };
            let shared = Arc::new(next);
            updated = Some(Arc::clone(&shared));
            *slot = Some(shared);
            true
        });
        updated
    }

    /// Subscribes to snapshot changes.
    ///
    /// The receiver observes every replacement and every effective update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Board>>> {
        self.snapshot.subscribe()
    }
}
