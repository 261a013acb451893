//! Progress sink trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::ToolEvent;
use crate::domain::DomainError;

/// Asynchronous sink for [`ToolEvent`]s supplied by the host per invocation
#[async_trait]
pub trait EventEmitter: Send + Sync + Debug {
    async fn emit(&self, event: ToolEvent) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Emitter that keeps every event it receives
    #[derive(Debug, Default)]
    pub struct RecordingEventEmitter {
        events: Mutex<Vec<ToolEvent>>,
        attempts: AtomicUsize,
        fail_on: Option<usize>,
    }

    impl RecordingEventEmitter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail the emission with the given zero-based position
        pub fn failing_at(position: usize) -> Self {
            Self {
                fail_on: Some(position),
                ..Self::default()
            }
        }

        pub fn events(&self) -> Vec<ToolEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn citations(&self) -> Vec<ToolEvent> {
            self.events().into_iter().filter(ToolEvent::is_citation).collect()
        }

        pub fn statuses(&self) -> Vec<ToolEvent> {
            self.events().into_iter().filter(ToolEvent::is_status).collect()
        }
    }

    #[async_trait]
    impl EventEmitter for RecordingEventEmitter {
        async fn emit(&self, event: ToolEvent) -> Result<(), DomainError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);

            if self.fail_on == Some(attempt) {
                return Err(DomainError::event("sink closed"));
            }

            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }
}
