//! Per-invocation collaborators

use std::sync::Arc;

use crate::domain::events::{EventEmitter, ToolEvent};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Optional collaborators injected by the host for a single tool call
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    emitter: Option<Arc<dyn EventEmitter>>,
    user_id: Option<UserId>,
}

impl ToolContext {
    /// Context without a progress sink or caller identity
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emitter(mut self, emitter: Arc<dyn EventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn has_emitter(&self) -> bool {
        self.emitter.is_some()
    }

    /// Forward `event` to the sink; a no-op without one
    pub async fn emit(&self, event: ToolEvent) -> Result<(), DomainError> {
        match &self.emitter {
            Some(emitter) => emitter.emit(event).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::RecordingEventEmitter;

    #[tokio::test]
    async fn test_emit_without_sink_is_noop() {
        let ctx = ToolContext::new();

        assert!(ctx.emit(ToolEvent::in_progress("x")).await.is_ok());
        assert!(!ctx.has_emitter());
    }

    #[tokio::test]
    async fn test_emit_forwards_to_sink() {
        let emitter = Arc::new(RecordingEventEmitter::new());
        let ctx = ToolContext::new().with_emitter(emitter.clone());

        ctx.emit(ToolEvent::done("finished")).await.unwrap();

        assert_eq!(emitter.events(), vec![ToolEvent::done("finished")]);
    }
}
