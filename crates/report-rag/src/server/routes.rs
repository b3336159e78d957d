//! API routes

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{QueryRequest, QueryResponse};

/// POST /api/query - Answer a question against the indexed corpus
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let start = Instant::now();

    tracing::info!("Query: \"{}\"", request.query);

    let answer = state.pipeline().answer(&request.query).await?;
    let processing_time_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Answered in {}ms (source: {})",
        processing_time_ms,
        answer.source.as_deref().unwrap_or("none")
    );

    Ok(Json(QueryResponse::from_answer(answer, processing_time_ms)))
}

/// GET /health - Liveness check
pub async fn health() -> &'static str {
    "OK"
}
