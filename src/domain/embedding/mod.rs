//! Embedding domain - the host's embedding generation capability

mod function;
mod provider;
mod request;
mod response;

pub use function::EmbeddingFunction;
pub use provider::EmbeddingProvider;
pub use request::EmbeddingRequest;
pub use response::{cosine_similarity, Embedding, EmbeddingResponse};

#[cfg(test)]
pub use provider::mock::MockEmbeddingProvider;
