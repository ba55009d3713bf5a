//! Port contracts for board synchronization.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notices;
pub mod task_api;

pub use notices::{ErrorNotice, NoticeKind, NoticeSink};
pub use task_api::{CreateTaskRequest, TaskApi, TaskApiError, TaskApiResult, TaskPatch};
