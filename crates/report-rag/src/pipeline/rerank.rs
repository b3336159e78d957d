//! Exact cosine reranking of sentence candidates

use crate::error::Result;
use crate::index::cosine_similarity;
use crate::providers::EmbeddingProvider;

use super::extract::SentenceCandidate;

/// Score every candidate against the query embedding and order by descending
/// similarity.
///
/// Candidates are embedded with the same provider that embedded the query.
/// The sort is stable, so candidates with exactly equal scores keep their
/// extraction order. Scoring is exact over the handful of sentences from the
/// top-k chunks; no approximate search happens here.
pub async fn rerank(
    mut candidates: Vec<SentenceCandidate>,
    query_embedding: &[f32],
    embedder: &dyn EmbeddingProvider,
) -> Result<Vec<SentenceCandidate>> {
    let texts: Vec<String> = candidates.iter().map(|c| c.text.clone()).collect();
    let embeddings = embedder.embed_batch(&texts).await?;

    for (candidate, embedding) in candidates.iter_mut().zip(&embeddings) {
        candidate.score = Some(cosine_similarity(query_embedding, embedding));
    }

    candidates.sort_by(|a, b| {
        b.score
            .unwrap_or(0.0)
            .total_cmp(&a.score.unwrap_or(0.0))
    });

    Ok(candidates)
}
