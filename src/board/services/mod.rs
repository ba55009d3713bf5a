//! Application services for board state and synchronization.

mod config;
mod store;
mod sync;

pub use config::SyncConfig;
pub use store::BoardStore;
pub use sync::{MoveOutcome, OptimisticSync, PendingMove, RenameOutcome, SyncError, SyncResult};
