//! Configuration for the question answering service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Embedding configuration
    #[serde(default)]
    pub embeddings: EmbeddingConfig,
    /// Vector index configuration
    #[serde(default)]
    pub index: IndexConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// Temporal relevance configuration
    #[serde(default)]
    pub temporal: TemporalConfig,
    /// Sanitizer configuration
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    /// Answer composition configuration
    #[serde(default)]
    pub answer: AnswerConfig,
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

impl RagConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration from a file if a path is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Embedding configuration
///
/// One provider instance built from this is shared by the index build, the
/// query embedding, and the sentence reranker, so all vectors live in the
/// same embedding space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub model: String,
    /// Embedding dimensions (768 for nomic-embed-text)
    pub dimensions: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "nomic-embed-text".to_string(),
            dimensions: 768,
            timeout_secs: 120,
            max_retries: 2,
        }
    }
}

/// Vector index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Storage path for the persisted index
    pub storage_path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data/index.json"),
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks to retrieve per query
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

/// Temporal relevance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalConfig {
    /// Years recognized verbatim in queries
    pub recognized_years: Vec<i32>,
    /// Keywords that signal future-looking intent
    pub future_keywords: Vec<String>,
    /// Year assumed when a future keyword matches (latest known report year)
    pub anchor_year: i32,
    /// Width of the accepted source-year window above the expected year
    pub year_horizon: i32,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            recognized_years: (2020..=2024).collect(),
            future_keywords: vec![
                "beyond".to_string(),
                "future".to_string(),
                "next year".to_string(),
                "vision".to_string(),
                "looking ahead".to_string(),
            ],
            anchor_year: 2023,
            year_horizon: 7,
        }
    }
}

/// Sanitizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Substrings marking boilerplate lines and sentences (matched
    /// case-insensitively): organization footers, navigation text, contact
    /// blocks.
    pub boilerplate_markers: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            boilerplate_markers: vec![
                "follow us".to_string(),
                "annual report".to_string(),
                "contents".to_string(),
            ],
        }
    }
}

/// How selected sentences are joined into the answer text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStyle {
    /// Join with a single space
    Space,
    /// Render as a dashed list, one sentence per line
    DashedList,
}

/// Which chunk's metadata backs the citation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationPolicy {
    /// Cite the first retrieved chunk (the top retrieval hit)
    TopHit,
    /// Cite the chunk the top-ranked sentence came from
    SentenceOrigin,
}

/// Answer composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Minimum words for a sentence candidate (deployments use 4 or 6)
    pub min_words: usize,
    /// Minimum alphabetic characters for a sentence candidate
    pub min_letters: usize,
    /// Number of top-ranked sentences in the answer (deployments use 2 or 3)
    pub top_n: usize,
    /// How selected sentences are joined
    pub join_style: JoinStyle,
    /// Which chunk backs the citation
    pub citation_policy: CitationPolicy,
    /// Notice appended to raw-chunk fallback answers, pointing at the
    /// canonical full resource
    pub redirect_notice: String,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            min_words: 4,
            min_letters: 20,
            top_n: 3,
            join_style: JoinStyle::Space,
            citation_policy: CitationPolicy::TopHit,
            redirect_notice: "You can find more in the full report at the publisher's website."
                .to_string(),
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between chunks in characters
    pub chunk_overlap: usize,
    /// Minimum chunk size (skip smaller chunks)
    pub min_chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 800,
            chunk_overlap: 150,
            min_chunk_size: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: RagConfig = toml::from_str(
            r#"
            [answer]
            min_words = 6
            min_letters = 20
            top_n = 2
            join_style = "dashed_list"
            citation_policy = "sentence_origin"
            redirect_notice = "See the full report."
            "#,
        )
        .unwrap();

        assert_eq!(config.answer.min_words, 6);
        assert_eq!(config.answer.top_n, 2);
        assert_eq!(config.answer.join_style, JoinStyle::DashedList);
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.temporal.anchor_year, 2023);
    }
}
