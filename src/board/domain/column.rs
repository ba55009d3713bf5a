//! Board columns.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A named bucket of tasks with a left-to-right display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    position: u32,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display position among the board's columns.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }
}
