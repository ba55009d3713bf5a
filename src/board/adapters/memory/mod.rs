//! In-memory adapter implementations.
//!
//! These adapters keep all state in process. They back the integration
//! tests and any embedding that has no remote server.

mod notices;
mod task_api;

pub use notices::InMemoryNoticeSink;
pub use task_api::{BoardSeed, InMemoryTaskApi};
