//! In-memory notice sink.

use std::sync::{Arc, Mutex, PoisonError};

use crate::board::ports::{ErrorNotice, NoticeKind, NoticeSink};

/// Collects notices for later inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoticeSink {
    notices: Arc<Mutex<Vec<ErrorNotice>>>,
}

impl InMemoryNoticeSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice reported so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<ErrorNotice> {
        self.lock().clone()
    }

    /// Returns the kinds of reported notices, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.lock().iter().map(|notice| notice.kind).collect()
    }

    /// Removes and returns every reported notice.
    #[must_use]
    pub fn drain(&self) -> Vec<ErrorNotice> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ErrorNotice>> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoticeSink for InMemoryNoticeSink {
    fn report(&self, notice: ErrorNotice) {
        self.lock().push(notice);
    }
}
