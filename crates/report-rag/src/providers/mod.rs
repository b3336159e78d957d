//! Provider traits and implementations for external collaborators

pub mod embedding;
pub mod ollama;

pub use embedding::EmbeddingProvider;
pub use ollama::OllamaEmbedder;
