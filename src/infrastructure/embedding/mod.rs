//! Embedding provider implementations

mod factory;
mod hashing;
mod http_client;
mod openai;

pub use factory::create_embedding_provider;
pub use hashing::HashingEmbeddingProvider;
pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::OpenAiEmbeddingProvider;

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
