//! Adapter implementations of the board ports.

pub mod channel;
pub mod memory;

pub use channel::ChannelNoticeSink;
