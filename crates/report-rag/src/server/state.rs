//! Application state for the HTTP server

use std::sync::Arc;

use crate::pipeline::AnswerPipeline;

/// Shared application state: the pipeline, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<AnswerPipeline>,
}

impl AppState {
    /// Create new application state
    pub fn new(pipeline: AnswerPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Get the answering pipeline
    pub fn pipeline(&self) -> &AnswerPipeline {
        &self.pipeline
    }
}
