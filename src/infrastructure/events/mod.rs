//! Event emitter implementations

mod channel;

pub use channel::{channel, ChannelEventEmitter};
