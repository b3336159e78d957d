//! Chunk types with source tracking for citations

use serde::{Deserialize, Serialize};

/// Provenance of a chunk: the document it came from and (if known) the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRef {
    /// Source document path or filename
    pub source: String,
    /// Page number (1-indexed), if the loader could determine one
    pub page: Option<u32>,
}

impl ChunkRef {
    /// Create a new chunk reference
    pub fn new(source: impl Into<String>, page: Option<u32>) -> Self {
        Self {
            source: source.into(),
            page,
        }
    }

    /// Format as a user-facing citation: `"<document-name> — Page <page>"`.
    ///
    /// Only the final path component of `source` is shown.
    pub fn format_citation(&self) -> String {
        let name = self
            .source
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.source);

        match self.page {
            Some(page) => format!("{} — Page {}", name, page),
            None => format!("{} — Page unknown", name),
        }
    }
}

/// A contiguous span of source document text, as returned by the index.
///
/// Immutable within a query's lifetime; created per invocation and discarded
/// after the response is composed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content
    pub text: String,
    /// Source information for citations
    pub source: ChunkRef,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(text: impl Into<String>, source: ChunkRef) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// A chunk together with its embedding, as persisted in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChunk {
    /// The chunk itself
    pub chunk: Chunk,
    /// Embedding vector
    pub embedding: Vec<f32>,
}

/// Search result with chunk and similarity
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Similarity to the query (higher is better)
    pub similarity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_with_page() {
        let source = ChunkRef::new("docs/annual-report-2023.pdf", Some(14));
        assert_eq!(
            source.format_citation(),
            "annual-report-2023.pdf — Page 14"
        );
    }

    #[test]
    fn test_citation_strips_windows_paths() {
        let source = ChunkRef::new(r"docs\annual-report-2023.pdf", None);
        assert_eq!(
            source.format_citation(),
            "annual-report-2023.pdf — Page unknown"
        );
    }
}
