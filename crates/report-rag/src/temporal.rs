//! Source-temporal relevance: inferring the year a query asks about and
//! preferring chunks from documents of that year or later.

use crate::config::TemporalConfig;
use crate::types::ScoredChunk;

/// Infer the year a query is asking about.
///
/// A recognized year appearing verbatim in the query wins outright. Only when
/// no year is present, a future-looking keyword (matched case-insensitively)
/// yields the configured anchor year.
pub fn infer_expected_year(query: &str, config: &TemporalConfig) -> Option<i32> {
    for year in &config.recognized_years {
        if query.contains(&year.to_string()) {
            return Some(*year);
        }
    }

    let lower = query.to_lowercase();
    if config
        .future_keywords
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
    {
        return Some(config.anchor_year);
    }

    None
}

/// Keep chunks whose source name mentions any year in
/// `[expected_year, expected_year + horizon]`.
///
/// Returns the input unchanged when `expected_year` is `None`, and also when
/// filtering would leave nothing: the filter must never reduce results to
/// zero when an answer might exist elsewhere.
pub fn filter_by_year(
    chunks: Vec<ScoredChunk>,
    expected_year: Option<i32>,
    horizon: i32,
) -> Vec<ScoredChunk> {
    let Some(year) = expected_year else {
        return chunks;
    };

    let tokens: Vec<String> = (year..=year.saturating_add(horizon))
        .map(|y| y.to_string())
        .collect();

    let kept: Vec<ScoredChunk> = chunks
        .iter()
        .filter(|scored| tokens.iter().any(|t| scored.chunk.source.source.contains(t)))
        .cloned()
        .collect();

    if kept.is_empty() {
        chunks
    } else {
        kept
    }
}
