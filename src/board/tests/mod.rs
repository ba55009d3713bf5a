//! Unit tests for board ordering and synchronization.
