//! Exact-scan vector index persisted as JSON
//!
//! Retrieval quality for a corpus of a few thousand chunks does not need an
//! approximate structure; a flat cosine scan is exact and fast enough, and
//! keeps the on-disk format trivially inspectable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::{Chunk, ScoredChunk, StoredChunk};

use super::{cosine_similarity, VectorIndex};

/// Persisted index file format
#[derive(Serialize, Deserialize)]
struct IndexFile {
    dimensions: usize,
    entries: Vec<StoredChunk>,
}

/// In-memory flat index over embedded chunks
pub struct FlatIndex {
    entries: Vec<StoredChunk>,
    dimensions: usize,
}

impl FlatIndex {
    /// Create an index from already-embedded chunks (e.g. when loading).
    pub fn from_entries(entries: Vec<StoredChunk>, dimensions: usize) -> Result<Self> {
        for entry in &entries {
            if entry.embedding.len() != dimensions {
                return Err(Error::index(format!(
                    "chunk from '{}' has {} dimensions, index expects {}",
                    entry.chunk.source.source,
                    entry.embedding.len(),
                    dimensions
                )));
            }
        }

        Ok(Self {
            entries,
            dimensions,
        })
    }

    /// Build an index by embedding every chunk.
    ///
    /// An empty corpus is a fatal build error: the index is never built
    /// lazily with partial data.
    pub async fn build(chunks: Vec<Chunk>, embedder: &dyn EmbeddingProvider) -> Result<Self> {
        if chunks.is_empty() {
            return Err(Error::EmptyCorpus(
                "no chunks to index; load documents first".to_string(),
            ));
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        let entries: Vec<StoredChunk> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| StoredChunk { chunk, embedding })
            .collect();

        Self::from_entries(entries, embedder.dimensions())
    }

    /// Load a persisted index from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: IndexFile = serde_json::from_str(&content)?;
        Self::from_entries(file.entries, file.dimensions)
    }

    /// Persist the index to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = IndexFile {
            dimensions: self.dimensions,
            entries: self.entries.clone(),
        };

        std::fs::write(path, serde_json::to_string(&file)?)?;
        Ok(())
    }

    /// Embedding dimensions this index was built with
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[async_trait]
impl VectorIndex for FlatIndex {
    async fn search(&self, query_embedding: &[f32], k: usize) -> Result<Vec<ScoredChunk>> {
        if query_embedding.len() != self.dimensions {
            return Err(Error::index(format!(
                "query embedding has {} dimensions, index expects {}",
                query_embedding.len(),
                self.dimensions
            )));
        }

        let mut results: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                similarity: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        results.truncate(k);

        Ok(results)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChunkRef;

    fn stored(text: &str, source: &str, embedding: Vec<f32>) -> StoredChunk {
        StoredChunk {
            chunk: Chunk::new(text, ChunkRef::new(source, Some(1))),
            embedding,
        }
    }

    #[tokio::test]
    async fn test_search_orders_by_similarity() {
        let index = FlatIndex::from_entries(
            vec![
                stored("far", "a.txt", vec![0.0, 1.0]),
                stored("near", "b.txt", vec![1.0, 0.1]),
                stored("middle", "c.txt", vec![1.0, 1.0]),
            ],
            2,
        )
        .unwrap();

        let results = index.search(&[1.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.text, "near");
        assert_eq!(results[1].chunk.text, "middle");
    }

    #[tokio::test]
    async fn test_dimension_mismatch_is_an_error() {
        let index = FlatIndex::from_entries(vec![stored("x", "a.txt", vec![1.0, 0.0])], 2).unwrap();
        assert!(index.search(&[1.0, 0.0, 0.0], 5).await.is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("report-rag-index-test");
        let path = dir.join("index.json");

        let index =
            FlatIndex::from_entries(vec![stored("hello", "a.txt", vec![0.3, 0.7])], 2).unwrap();
        index.save(&path).unwrap();

        let loaded = FlatIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.dimensions(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }
}
