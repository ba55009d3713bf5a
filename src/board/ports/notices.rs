//! Port for the user-visible error channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operation whose failure produced a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Initial or corrective board load failed.
    BoardFetch,
    /// Task creation failed.
    TaskCreate,
    /// Persisting a move failed; the board is reloaded.
    MovePersist,
    /// Persisting a title change failed; the title is reverted.
    TaskRename,
}

/// Human-readable error shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    /// Operation that failed.
    pub kind: NoticeKind,
    /// Message suitable for display.
    pub message: String,
    /// When the failure was observed.
    pub raised_at: DateTime<Utc>,
}

/// Receiver of user-visible error notices.
pub trait NoticeSink: Send + Sync {
    /// Publishes a notice. Delivery failures are not reported back.
    fn report(&self, notice: ErrorNotice);
}
