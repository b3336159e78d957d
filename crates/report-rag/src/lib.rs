//! report-rag: extractive document Q&A with sentence reranking and citations
//!
//! Answers natural-language questions against a private document corpus by
//! retrieving relevant chunks from a vector index, reranking at sentence
//! granularity with the same embedding model that built the index, and
//! composing a short answer from verbatim source sentences with a citation.
//! There is no generative model anywhere: every answer span appeared in a
//! retrieved chunk.

pub mod config;
pub mod error;
pub mod index;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod server;
pub mod temporal;
pub mod text;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use pipeline::AnswerPipeline;
pub use types::{Answer, Chunk, ChunkRef, QueryRequest, QueryResponse};
