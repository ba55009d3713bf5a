//! Boardsync: ordering and optimistic synchronization for task boards.
//!
//! This crate keeps a kanban board's column orderings consistent while the
//! user drags tasks around, and reconciles those local changes with an
//! authoritative task server.
//!
//! # Architecture
//!
//! Boardsync follows hexagonal architecture principles:
//!
//! - **Domain**: Board snapshots, ordering queries and the move reconciler
//! - **Ports**: The task API and notice sink traits
//! - **Adapters**: In-memory and channel implementations of the ports
//! - **Services**: The board store and the optimistic synchronizer
//!
//! # Modules
//!
//! - [`board`]: Task board ordering and synchronization

pub mod board;
