//! Answer composition and the raw-chunk fallback

use crate::config::{AnswerConfig, CitationPolicy, JoinStyle};
use crate::text::{normalize_list_marker, sanitize, SentenceSegmenter};
use crate::types::{Answer, ScoredChunk};

use super::extract::SentenceCandidate;

const NO_ANSWER_TEXT: &str = "Sorry, I couldn't find a good answer.";

/// Join the top-ranked sentences into the final extractive answer and attach
/// a citation.
///
/// Each selected sentence is stripped of list markers (after scoring, so
/// surface formatting never influenced the ranking) and the joined text is
/// whitespace-normalized. The cited chunk follows the configured policy:
/// the top retrieval hit, or the origin chunk of the winning sentence.
pub fn compose(
    ranked: &[SentenceCandidate],
    chunks: &[ScoredChunk],
    config: &AnswerConfig,
) -> Answer {
    let selected: Vec<String> = ranked
        .iter()
        .take(config.top_n)
        .map(|c| normalize_list_marker(&c.text))
        .collect();

    let joined = match config.join_style {
        JoinStyle::Space => selected.join(" "),
        JoinStyle::DashedList => selected
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    let text = sanitize(&joined);

    let cited = match config.citation_policy {
        CitationPolicy::TopHit => chunks.first(),
        CitationPolicy::SentenceOrigin => ranked
            .first()
            .and_then(|c| chunks.get(c.chunk_index))
            .or_else(|| chunks.first()),
    };
    let source = cited.map(|c| c.chunk.source.format_citation());

    if text.is_empty() {
        Answer {
            text: NO_ANSWER_TEXT.to_string(),
            source,
        }
    } else {
        Answer { text, source }
    }
}

/// Raw-chunk fallback when no sentence survived filtering.
///
/// Answers with the first retrieved chunk's first detected sentence (or its
/// whole sanitized text), followed by the configured redirect notice, cited
/// from that chunk's metadata. Deterministic: a corpus with no qualifying
/// sentences still produces a non-empty answer.
pub fn fallback(
    first_chunk: &ScoredChunk,
    segmenter: &dyn SentenceSegmenter,
    redirect_notice: &str,
) -> Answer {
    let sentences = segmenter.segment(&first_chunk.chunk.text);
    let base = match sentences.first() {
        Some(sentence) => sanitize(sentence),
        None => sanitize(&first_chunk.chunk.text),
    };

    let text = if redirect_notice.is_empty() {
        base
    } else {
        format!("{}\n\n{}", base, redirect_notice)
            .trim()
            .to_string()
    };

    Answer {
        text,
        source: Some(first_chunk.chunk.source.format_citation()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::UnicodeSegmenter;
    use crate::types::{Chunk, ChunkRef};

    fn scored(text: &str, source: &str) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk::new(text, ChunkRef::new(source, Some(3))),
            similarity: 0.9,
        }
    }

    fn candidate(text: &str, chunk_index: usize, score: f32) -> SentenceCandidate {
        SentenceCandidate {
            text: text.to_string(),
            chunk_index,
            score: Some(score),
        }
    }

    #[test]
    fn test_compose_joins_and_normalizes() {
        let chunks = vec![scored("irrelevant", "report-2023.pdf")];
        let ranked = vec![
            candidate("a. Enrollment grew strongly.", 0, 0.9),
            candidate("2) Completion  rates improved.", 0, 0.8),
            candidate("Dropped by top_n.", 0, 0.7),
        ];

        let mut config = AnswerConfig::default();
        config.top_n = 2;

        let answer = compose(&ranked, &chunks, &config);
        assert_eq!(
            answer.text,
            "Enrollment grew strongly. Completion rates improved."
        );
        assert_eq!(answer.source.as_deref(), Some("report-2023.pdf — Page 3"));
    }

    #[test]
    fn test_compose_dashed_list_style() {
        let chunks = vec![scored("irrelevant", "report-2023.pdf")];
        let ranked = vec![
            candidate("First highlight.", 0, 0.9),
            candidate("Second highlight.", 0, 0.8),
        ];

        let mut config = AnswerConfig::default();
        config.join_style = JoinStyle::DashedList;

        let answer = compose(&ranked, &chunks, &config);
        // sanitize flattens line breaks after joining
        assert_eq!(answer.text, "- First highlight. - Second highlight.");
    }

    #[test]
    fn test_citation_policies() {
        let chunks = vec![
            scored("top hit", "first-2022.pdf"),
            scored("origin of winner", "second-2023.pdf"),
        ];
        let ranked = vec![candidate("Winning sentence from chunk two.", 1, 0.95)];

        let mut config = AnswerConfig::default();
        config.citation_policy = CitationPolicy::TopHit;
        let answer = compose(&ranked, &chunks, &config);
        assert_eq!(answer.source.as_deref(), Some("first-2022.pdf — Page 3"));

        config.citation_policy = CitationPolicy::SentenceOrigin;
        let answer = compose(&ranked, &chunks, &config);
        assert_eq!(answer.source.as_deref(), Some("second-2023.pdf — Page 3"));
    }

    #[test]
    fn test_empty_ranking_still_carries_citation() {
        let chunks = vec![scored("text", "report.pdf")];
        let answer = compose(&[], &chunks, &AnswerConfig::default());
        assert_eq!(answer.text, NO_ANSWER_TEXT);
        assert!(answer.source.is_some());
    }

    #[test]
    fn test_fallback_uses_first_sentence_and_notice() {
        let chunk = scored(
            "Programs reached ninety communities. Further detail follows below.",
            "report-2023.pdf",
        );

        let answer = fallback(&chunk, &UnicodeSegmenter, "See the full report online.");
        assert_eq!(
            answer.text,
            "Programs reached ninety communities.\n\nSee the full report online."
        );
        assert_eq!(answer.source.as_deref(), Some("report-2023.pdf — Page 3"));
    }
}
