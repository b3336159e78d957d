//! Query request types

use serde::{Deserialize, Serialize};

/// Query request for the answering endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub query: String,
}

impl QueryRequest {
    /// Create a new query request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Per-query context derived once before retrieval.
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// The raw query string as received
    pub raw_query: String,
    /// Year the query is asking about, if one could be inferred
    pub expected_year: Option<i32>,
}
