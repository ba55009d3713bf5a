//! Task board ordering and optimistic synchronization.
//!
//! Tasks live in ordered columns. This module keeps the per-column order of
//! a board snapshot consistent while tasks are moved, applies moves before
//! the server confirms them, and falls back to the server's board when a
//! move is rejected. It follows hexagonal architecture:
//!
//! - Domain types and pure ordering algorithms in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Store and orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
