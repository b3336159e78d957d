//! Sentence candidate extraction from retrieved chunks

use std::collections::HashSet;

use crate::config::AnswerConfig;
use crate::text::SentenceSegmenter;
use crate::types::ScoredChunk;

/// URL and email markers that disqualify a sentence
const URL_MARKERS: [&str; 2] = ["www.", "http"];
const EMAIL_MARKER: char = '@';

/// A sentence-level span extracted from a retrieved chunk, eligible for
/// ranking.
#[derive(Debug, Clone)]
pub struct SentenceCandidate {
    /// Sentence text, trimmed; always a substring (modulo whitespace) of the
    /// origin chunk's text
    pub text: String,
    /// Index of the producing chunk in the retrieved slice, kept so citation
    /// metadata survives reranking
    pub chunk_index: usize,
    /// Cosine similarity to the query, assigned during reranking
    pub score: Option<f32>,
}

/// Segment each retrieved chunk into sentences and filter to answer-worthy
/// candidates, in chunk order.
///
/// Sentences are dropped when they carry a URL or email marker, match a
/// boilerplate phrase (case-insensitive), have fewer than `min_letters`
/// alphabetic characters, or fewer than `min_words` words. Duplicates (exact
/// post-trim equality) keep only their first occurrence.
pub fn extract_candidates(
    chunks: &[ScoredChunk],
    segmenter: &dyn SentenceSegmenter,
    config: &AnswerConfig,
    boilerplate: &[String],
) -> Vec<SentenceCandidate> {
    let boilerplate: Vec<String> = boilerplate.iter().map(|m| m.to_lowercase()).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for (chunk_index, scored) in chunks.iter().enumerate() {
        for sentence in segmenter.segment(&scored.chunk.text) {
            let text = sentence.trim();
            if text.is_empty() {
                continue;
            }

            let lower = text.to_lowercase();
            if URL_MARKERS.iter().any(|m| lower.contains(m)) {
                continue;
            }
            if text.contains(EMAIL_MARKER) {
                continue;
            }
            if boilerplate.iter().any(|m| lower.contains(m)) {
                continue;
            }

            let letters = text.chars().filter(|c| c.is_alphabetic()).count();
            if letters < config.min_letters {
                continue;
            }
            if text.split_whitespace().count() < config.min_words {
                continue;
            }

            if !seen.insert(text.to_string()) {
                continue;
            }

            candidates.push(SentenceCandidate {
                text: text.to_string(),
                chunk_index,
                score: None,
            });
        }
    }

    candidates
}
