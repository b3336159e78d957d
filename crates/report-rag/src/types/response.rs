//! Response types for answered queries

use serde::{Deserialize, Serialize};

/// The sole output of the answering pipeline.
///
/// `text` is composed exclusively of verbatim spans from retrieved source
/// text (up to whitespace normalization); `source` is a formatted citation,
/// or `None` when nothing qualified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Extracted answer text
    pub text: String,
    /// Formatted citation, e.g. `"report-2023.pdf — Page 14"`
    pub source: Option<String>,
}

impl Answer {
    /// Fixed answer for an empty or whitespace-only query.
    pub fn invalid_query() -> Self {
        Self {
            text: "Please enter a valid query.".to_string(),
            source: None,
        }
    }

    /// Fixed answer when retrieval returned nothing.
    pub fn not_found() -> Self {
        Self {
            text: "Sorry, no relevant information found.".to_string(),
            source: None,
        }
    }
}

/// Response from the query endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Extracted answer text
    pub answer: String,
    /// Source citation, if any
    pub source: Option<String>,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl QueryResponse {
    /// Wrap a pipeline answer for the HTTP layer
    pub fn from_answer(answer: Answer, processing_time_ms: u64) -> Self {
        Self {
            answer: answer.text,
            source: answer.source,
            processing_time_ms,
        }
    }
}
