//! Corpus loading and chunking for index builds

pub mod chunker;
pub mod loader;

pub use chunker::TextChunker;
pub use loader::{load_corpus, LoadedDocument, LoadedPage};

use std::path::Path;

use crate::config::RagConfig;
use crate::error::Result;
use crate::types::Chunk;

/// Load every supported document under `dir` and split it into chunks ready
/// for embedding.
pub fn build_chunks(dir: &Path, config: &RagConfig) -> Result<Vec<Chunk>> {
    let documents = load_corpus(dir, &config.sanitizer.boilerplate_markers)?;
    let chunker = TextChunker::new(&config.chunking);

    let mut chunks = Vec::new();
    for document in &documents {
        let document_chunks = chunker.chunk_document(document);
        tracing::info!(
            "Chunked {} into {} chunks",
            document.filename,
            document_chunks.len()
        );
        chunks.extend(document_chunks);
    }

    Ok(chunks)
}
