//! Configuration for board synchronization.

use crate::board::domain::BoardDomainError;

/// Title normalization applied before titles reach the server.
///
/// # Examples
///
/// ```
/// use boardsync::board::services::SyncConfig;
///
/// let config = SyncConfig::default();
/// assert_eq!(config.normalize_title("  Write docs  "), Ok("Write docs".to_owned()));
///
/// let lenient = SyncConfig::lenient();
/// assert_eq!(lenient.normalize_title(" raw "), Ok(" raw ".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Whether leading and trailing whitespace is removed from titles.
    pub trim_titles: bool,
    /// Maximum title length in characters, if any.
    pub max_title_chars: Option<usize>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            trim_titles: true,
            max_title_chars: Some(200),
        }
    }
}

impl SyncConfig {
    /// Creates a configuration that sends titles as typed, without a length
    /// cap. Blank titles are still rejected.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            trim_titles: false,
            max_title_chars: None,
        }
    }

    /// Normalizes a user-entered title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank and
    /// [`BoardDomainError::TitleTooLong`] when it exceeds
    /// [`Self::max_title_chars`].
    pub fn normalize_title(&self, raw: &str) -> Result<String, BoardDomainError> {
        if raw.trim().is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        let title = if self.trim_titles { raw.trim() } else { raw };

        let actual = title.chars().count();
        match self.max_title_chars {
            Some(max) if actual > max => Err(BoardDomainError::TitleTooLong { max, actual }),
            _ => Ok(title.to_owned()),
        }
    }
}
