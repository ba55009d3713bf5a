//! Domain model for the task board.
//!
//! Holds the snapshot types together with the two pure algorithms that
//! derive and rewrite column orderings: [`order_index`] and [`reconciler`].
//! Nothing in this module performs I/O.

mod board;
mod column;
mod error;
mod ids;
pub mod order_index;
pub mod reconciler;
mod task;

pub use board::{Board, BoardMeta};
pub use column::Column;
pub use error::{BoardDomainError, BoardDrift};
pub use ids::{BoardId, ColumnId, TaskId};
pub use reconciler::{MoveIntent, apply_move, apply_move_or_keep};
pub use task::Task;
