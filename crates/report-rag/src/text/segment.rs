//! Sentence boundary detection

use unicode_segmentation::UnicodeSegmentation;

/// Sentence boundary detector.
///
/// The pipeline takes this as a collaborator so tests can substitute a
/// deterministic splitter.
pub trait SentenceSegmenter: Send + Sync {
    /// Split text into sentences, in document order.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Sentence segmentation using UAX #29 boundary rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl SentenceSegmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
