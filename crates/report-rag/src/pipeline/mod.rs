//! The retrieval-to-answer pipeline
//!
//! One query runs one ordered sequence of stages: temporal inference,
//! index lookup, year filtering, sentence extraction, cosine reranking, and
//! answer composition with citation. Everything here is request-scoped; the
//! index and the embedder are shared read-only.

pub mod compose;
pub mod extract;
pub mod rerank;

use std::sync::Arc;

pub use extract::{extract_candidates, SentenceCandidate};

use crate::config::RagConfig;
use crate::error::Result;
use crate::index::VectorIndex;
use crate::providers::EmbeddingProvider;
use crate::temporal;
use crate::text::{SentenceSegmenter, UnicodeSegmenter};
use crate::types::{Answer, QueryContext};

/// Extractive answering pipeline.
///
/// Constructed once at process start and injected into the serving layer;
/// holds no per-query state.
pub struct AnswerPipeline {
    config: RagConfig,
    index: Arc<dyn VectorIndex>,
    embedder: Arc<dyn EmbeddingProvider>,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl AnswerPipeline {
    /// Create a pipeline with the default sentence segmenter.
    pub fn new(
        config: RagConfig,
        index: Arc<dyn VectorIndex>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            config,
            index,
            embedder,
            segmenter: Box::new(UnicodeSegmenter),
        }
    }

    /// Replace the sentence segmenter (used by tests).
    pub fn with_segmenter(mut self, segmenter: Box<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Answer a query.
    ///
    /// Soft misses come back as `Answer` values; only embedding or index
    /// failures are errors. An empty query short-circuits before any
    /// embedding or segmentation work.
    pub async fn answer(&self, query: &str) -> Result<Answer> {
        if query.trim().is_empty() {
            return Ok(Answer::invalid_query());
        }

        let context = QueryContext {
            raw_query: query.to_string(),
            expected_year: temporal::infer_expected_year(query, &self.config.temporal),
        };
        if let Some(year) = context.expected_year {
            tracing::debug!(year, "query has temporal intent");
        }

        let query_embedding = self.embedder.embed(&context.raw_query).await?;
        let retrieved = self
            .index
            .search(&query_embedding, self.config.retrieval.top_k)
            .await?;
        tracing::debug!(chunks = retrieved.len(), "retrieved from index");

        if retrieved.is_empty() {
            return Ok(Answer::not_found());
        }

        let chunks = temporal::filter_by_year(
            retrieved,
            context.expected_year,
            self.config.temporal.year_horizon,
        );

        let candidates = extract::extract_candidates(
            &chunks,
            self.segmenter.as_ref(),
            &self.config.answer,
            &self.config.sanitizer.boilerplate_markers,
        );
        tracing::debug!(candidates = candidates.len(), "sentence candidates");

        if candidates.is_empty() {
            tracing::debug!("no candidates survived filtering, using raw-chunk fallback");
            return Ok(match chunks.first() {
                Some(first) => compose::fallback(
                    first,
                    self.segmenter.as_ref(),
                    &self.config.answer.redirect_notice,
                ),
                None => Answer::not_found(),
            });
        }

        let ranked =
            rerank::rerank(candidates, &query_embedding, self.embedder.as_ref()).await?;

        Ok(compose::compose(&ranked, &chunks, &self.config.answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::Error;
    use crate::index::FlatIndex;
    use crate::types::{Chunk, ChunkRef, StoredChunk};

    /// Deterministic test embedder: each dimension counts occurrences of one
    /// vocabulary word, so cosine similarity behaves predictably without a
    /// model.
    struct VocabEmbedder {
        vocab: Vec<&'static str>,
    }

    impl VocabEmbedder {
        fn new(vocab: Vec<&'static str>) -> Self {
            Self { vocab }
        }

        fn vector(&self, text: &str) -> Vec<f32> {
            let lower = text.to_lowercase();
            self.vocab
                .iter()
                .map(|word| lower.matches(word).count() as f32)
                .collect()
        }
    }

    #[async_trait]
    impl EmbeddingProvider for VocabEmbedder {
        async fn embed(&self, text: &str) -> crate::error::Result<Vec<f32>> {
            Ok(self.vector(text))
        }

        fn dimensions(&self) -> usize {
            self.vocab.len()
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "vocab"
        }
    }

    /// Embedder that fails every call; proves short-circuit paths never embed.
    struct FailingEmbedder;

    #[async_trait]
    impl EmbeddingProvider for FailingEmbedder {
        async fn embed(&self, _text: &str) -> crate::error::Result<Vec<f32>> {
            Err(Error::embedding("model unavailable"))
        }

        fn dimensions(&self) -> usize {
            0
        }

        async fn health_check(&self) -> crate::error::Result<bool> {
            Ok(false)
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn pipeline_with(
        entries: Vec<StoredChunk>,
        embedder: Arc<dyn EmbeddingProvider>,
        config: RagConfig,
    ) -> AnswerPipeline {
        let dims = embedder.dimensions();
        let index = Arc::new(FlatIndex::from_entries(entries, dims).unwrap());
        AnswerPipeline::new(config, index, embedder)
    }

    fn stored(embedder: &VocabEmbedder, text: &str, source: &str) -> StoredChunk {
        StoredChunk {
            chunk: Chunk::new(text, ChunkRef::new(source, Some(1))),
            embedding: embedder.vector(text),
        }
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        let pipeline = pipeline_with(
            Vec::new(),
            Arc::new(FailingEmbedder),
            RagConfig::default(),
        );

        let answer = pipeline.answer("   ").await.unwrap();
        assert_eq!(answer, Answer::invalid_query());
    }

    #[tokio::test]
    async fn test_empty_index_answers_not_found() {
        let embedder = Arc::new(VocabEmbedder::new(vec!["training"]));
        let pipeline = pipeline_with(Vec::new(), embedder, RagConfig::default());

        let answer = pipeline.answer("Where does training happen?").await.unwrap();
        assert_eq!(answer, Answer::not_found());
        assert!(answer.source.is_none());
    }

    #[tokio::test]
    async fn test_year_free_query_keeps_all_sources() {
        // Scenario: no year token and no future keyword -> the year filter is
        // a no-op and the best match can come from any source year.
        let embedder = VocabEmbedder::new(vec!["published", "institutions", "budget"]);
        let entries = vec![
            stored(
                &embedder,
                "The yearly publication was published alongside partner briefings nationwide.",
                "archive-2020.pdf",
            ),
            stored(
                &embedder,
                "Budget allocations favored rural institutions throughout the period.",
                "archive-2021.pdf",
            ),
        ];

        let pipeline = pipeline_with(entries, Arc::new(embedder), RagConfig::default());
        let answer = pipeline
            .answer("What year was the report published?")
            .await
            .unwrap();

        assert!(answer.text.contains("published"));
        assert_eq!(answer.source.as_deref(), Some("archive-2020.pdf — Page 1"));
    }

    #[tokio::test]
    async fn test_year_query_filters_sources() {
        // Scenario: "2023" in the query keeps only sources whose names carry
        // 2023 or a later year.
        let embedder = VocabEmbedder::new(vec!["graduates", "placement"]);
        let entries = vec![
            stored(
                &embedder,
                "Graduates found placement quickly, and graduates reported high satisfaction overall.",
                "report-2021.pdf",
            ),
            stored(
                &embedder,
                "Placement support reached more graduates than in any earlier cycle.",
                "report-2023.pdf",
            ),
        ];

        let pipeline = pipeline_with(entries, Arc::new(embedder), RagConfig::default());
        let answer = pipeline
            .answer("How many graduates found placement in 2023?")
            .await
            .unwrap();

        assert_eq!(answer.source.as_deref(), Some("report-2023.pdf — Page 1"));
        assert!(answer.text.contains("Placement support"));
        assert!(!answer.text.contains("satisfaction"));
    }

    #[tokio::test]
    async fn test_single_survivor_becomes_whole_answer() {
        // Scenario: one qualifying sentence among boilerplate -> it is the
        // entire composed answer.
        let embedder = VocabEmbedder::new(vec!["enrollment", "tailoring"]);
        let entries = vec![stored(
            &embedder,
            "Visit www.example.org today. \
             Enrollment in tailoring programs increased by forty percent this cycle. \
             123 456",
            "report-2023.pdf",
        )];

        let pipeline = pipeline_with(entries, Arc::new(embedder), RagConfig::default());
        let answer = pipeline
            .answer("What happened to tailoring enrollment?")
            .await
            .unwrap();

        assert_eq!(
            answer.text,
            "Enrollment in tailoring programs increased by forty percent this cycle."
        );
        assert_eq!(answer.source.as_deref(), Some("report-2023.pdf — Page 1"));
    }

    #[tokio::test]
    async fn test_fallback_when_nothing_qualifies() {
        // Every sentence fails the word/letter thresholds, so the raw-chunk
        // fallback fires with the redirect notice and the chunk's citation.
        let embedder = VocabEmbedder::new(vec!["short"]);
        let entries = vec![stored(&embedder, "Short note here.", "memo-2022.pdf")];

        let pipeline = pipeline_with(entries, Arc::new(embedder), RagConfig::default());
        let answer = pipeline.answer("Anything short to report?").await.unwrap();

        assert!(answer.text.starts_with("Short note here."));
        assert!(answer
            .text
            .contains(&RagConfig::default().answer.redirect_notice));
        assert_eq!(answer.source.as_deref(), Some("memo-2022.pdf — Page 1"));
    }
}
