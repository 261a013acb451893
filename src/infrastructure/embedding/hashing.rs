//! Offline embedding provider based on feature hashing
//!
//! Each lowercase alphanumeric token is hashed into one of `dimensions`
//! buckets with a sign taken from the hash, and the result is L2-normalised.
//! Texts sharing vocabulary end up close under cosine similarity, which is
//! enough to exercise retrieval without a model.

use async_trait::async_trait;

use crate::domain::embedding::{Embedding, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

pub const DEFAULT_HASHING_DIMENSIONS: usize = 256;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_HASHING_DIMENSIONS,
        }
    }
}

impl HashingEmbeddingProvider {
    pub fn new(dimensions: usize) -> Result<Self, DomainError> {
        if dimensions == 0 {
            return Err(DomainError::configuration(
                "Hashing embedding dimensions must be at least 1",
            ));
        }

        Ok(Self { dimensions })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let hash = fnv1a(&token.to_lowercase());
            let bucket = (hash % self.dimensions as u64) as usize;
            let sign = if (hash >> 63) == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }

        vector
    }
}

fn fnv1a(token: &str) -> u64 {
    token.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let embeddings = request
            .prefixed_inputs()
            .iter()
            .enumerate()
            .map(|(index, text)| Embedding::new(index, self.embed_text(text)))
            .collect();

        Ok(EmbeddingResponse::new(self.model(), embeddings))
    }

    fn provider_name(&self) -> &'static str {
        "hashing"
    }

    fn model(&self) -> &str {
        "feature-hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cosine_similarity;

    async fn vectors(provider: &HashingEmbeddingProvider, texts: &[&str]) -> Vec<Vec<f32>> {
        provider
            .embed(EmbeddingRequest::new(
                texts.iter().map(|t| t.to_string()).collect(),
            ))
            .await
            .unwrap()
            .into_vectors()
    }

    #[tokio::test]
    async fn test_deterministic_and_normalised() {
        let provider = HashingEmbeddingProvider::default();
        let v = vectors(&provider, &["Remote work policy", "remote WORK policy"]).await;

        assert_eq!(v[0], v[1]);
        let norm: f32 = v[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_shared_vocabulary_is_closer() {
        let provider = HashingEmbeddingProvider::default();
        let v = vectors(
            &provider,
            &[
                "vacation days policy",
                "how many vacation days do I get",
                "kubernetes cluster upgrade runbook",
            ],
        )
        .await;

        assert!(cosine_similarity(&v[0], &v[1]) > cosine_similarity(&v[0], &v[2]));
    }

    #[tokio::test]
    async fn test_empty_text_is_zero_vector() {
        let provider = HashingEmbeddingProvider::new(8).unwrap();
        let v = vectors(&provider, &["  ...  "]).await;

        assert_eq!(v[0], vec![0.0; 8]);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(HashingEmbeddingProvider::new(0).is_err());
    }
}
