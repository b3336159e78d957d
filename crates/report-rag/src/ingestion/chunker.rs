//! Sentence-aware text chunking with overlap

use unicode_segmentation::UnicodeSegmentation;

use crate::config::ChunkingConfig;
use crate::types::{Chunk, ChunkRef};

use super::loader::LoadedDocument;

/// Text chunker with configurable size and overlap
pub struct TextChunker {
    /// Target chunk size in characters
    chunk_size: usize,
    /// Overlap between chunks
    overlap: usize,
    /// Minimum chunk size
    min_size: usize,
}

impl TextChunker {
    /// Create a new chunker
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            overlap: config.chunk_overlap,
            min_size: config.min_chunk_size,
        }
    }

    /// Chunk a loaded document page by page, so every chunk keeps the page
    /// it came from.
    pub fn chunk_document(&self, document: &LoadedDocument) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for page in &document.pages {
            for text in self.chunk_text(&page.text) {
                chunks.push(Chunk::new(
                    text,
                    ChunkRef::new(document.filename.clone(), page.page),
                ));
            }
        }

        chunks
    }

    /// Split text into chunks, accumulating whole sentences up to the size
    /// budget and carrying overlap into the next chunk.
    fn chunk_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in text.split_sentence_bounds() {
            if !current.is_empty() && current.len() + sentence.len() > self.chunk_size {
                if current.trim().len() >= self.min_size {
                    chunks.push(current.trim().to_string());
                }
                current = self.overlap_text(&current);
            }
            current.push_str(sentence);
        }

        if current.trim().len() >= self.min_size {
            chunks.push(current.trim().to_string());
        }

        chunks
    }

    /// Take the trailing overlap window of a finished chunk, preferring a
    /// sentence start, then a word start.
    fn overlap_text(&self, text: &str) -> String {
        if text.len() <= self.overlap {
            return text.to_string();
        }

        let mut start = text.len().saturating_sub(self.overlap);
        while start > 0 && !text.is_char_boundary(start) {
            start -= 1;
        }

        let window = &text[start..];

        if let Some(pos) = window.find(". ") {
            return window[pos + 2..].to_string();
        }
        if let Some(pos) = window.find(' ') {
            return window[pos + 1..].to_string();
        }

        window.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::loader::LoadedPage;

    fn chunker(chunk_size: usize, overlap: usize, min_size: usize) -> TextChunker {
        TextChunker::new(&ChunkingConfig {
            chunk_size,
            chunk_overlap: overlap,
            min_chunk_size: min_size,
        })
    }

    #[test]
    fn test_small_text_is_one_chunk() {
        let document = LoadedDocument {
            filename: "report.pdf".to_string(),
            pages: vec![LoadedPage {
                page: Some(2),
                text: "One short paragraph of content.".to_string(),
            }],
        };

        let chunks = chunker(800, 150, 10).chunk_document(&document);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].source.page, Some(2));
        assert_eq!(chunks[0].source.source, "report.pdf");
    }

    #[test]
    fn test_long_text_splits_with_overlap() {
        let sentence = "This sentence provides a steady amount of prose for splitting. ";
        let text = sentence.repeat(10);

        let chunks = chunker(200, 60, 20).chunk_document(&LoadedDocument {
            filename: "long.txt".to_string(),
            pages: vec![LoadedPage { page: None, text }],
        });

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.text.len() <= 200 + sentence.len());
        }
    }

    #[test]
    fn test_tiny_fragments_are_skipped() {
        let chunks = chunker(800, 150, 50).chunk_document(&LoadedDocument {
            filename: "tiny.txt".to_string(),
            pages: vec![LoadedPage {
                page: None,
                text: "Too small.".to_string(),
            }],
        });

        assert!(chunks.is_empty());
    }
}
