//! Notice sink backed by a tokio channel.
//!
//! The presentation layer owns the receiving half and renders notices as
//! they arrive.

use tokio::sync::mpsc;

use crate::board::ports::{ErrorNotice, NoticeSink};

/// Forwards notices to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNoticeSink {
    sender: mpsc::UnboundedSender<ErrorNotice>,
}

impl ChannelNoticeSink {
    /// Creates a sink and the receiver its notices are delivered to.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ErrorNotice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NoticeSink for ChannelNoticeSink {
    fn report(&self, notice: ErrorNotice) {
        if let Err(err) = self.sender.send(notice) {
            tracing::debug!(kind = ?err.0.kind, "notice receiver dropped; discarding notice");
        }
    }
}
