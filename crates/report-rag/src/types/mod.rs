//! Core types for the question answering pipeline

pub mod chunk;
pub mod query;
pub mod response;

pub use chunk::{Chunk, ChunkRef, ScoredChunk, StoredChunk};
pub use query::{QueryContext, QueryRequest};
pub use response::{Answer, QueryResponse};
