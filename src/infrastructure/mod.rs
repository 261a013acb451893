//! Infrastructure layer - host capability implementations and tool handlers

pub mod embedding;
pub mod events;
pub mod knowledge_base;
pub mod logging;
pub mod tools;
pub mod user;
