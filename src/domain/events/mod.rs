//! Progress events streamed to the host UI while a tool runs

mod emitter;
mod event;

pub use emitter::EventEmitter;
pub use event::{CitationMetadata, CitationSource, ToolEvent};

#[cfg(test)]
pub use emitter::mock::RecordingEventEmitter;
