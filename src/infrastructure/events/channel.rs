//! Emitter forwarding tool events into a tokio channel

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::events::{EventEmitter, ToolEvent};
use crate::domain::DomainError;

/// Forwards every event to an mpsc receiver owned by the host
#[derive(Debug, Clone)]
pub struct ChannelEventEmitter {
    sender: mpsc::Sender<ToolEvent>,
}

impl ChannelEventEmitter {
    pub fn new(sender: mpsc::Sender<ToolEvent>) -> Self {
        Self { sender }
    }
}

/// Create a bounded emitter together with the receiving end
pub fn channel(capacity: usize) -> (ChannelEventEmitter, mpsc::Receiver<ToolEvent>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (ChannelEventEmitter::new(sender), receiver)
}

#[async_trait]
impl EventEmitter for ChannelEventEmitter {
    async fn emit(&self, event: ToolEvent) -> Result<(), DomainError> {
        self.sender
            .send(event)
            .await
            .map_err(|_| DomainError::event("event receiver closed"))
    }
}
