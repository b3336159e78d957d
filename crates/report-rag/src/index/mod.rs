//! Vector index abstraction over chunk storage and search

pub mod flat;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ScoredChunk;

pub use flat::FlatIndex;

/// Nearest-neighbor search over stored chunks.
///
/// Process-wide, read-mostly resource: initialized once at startup and shared
/// across query invocations. The answering pipeline never mutates it.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Search for the `k` chunks most similar to the query embedding,
    /// ordered by descending similarity.
    async fn search(&self, query_embedding: &[f32], k: usize) -> Result<Vec<ScoredChunk>>;

    /// Number of stored chunks
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cosine similarity between two vectors: `(a·b) / (|a||b|)`.
///
/// Zero-magnitude vectors score 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
