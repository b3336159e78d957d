//! Question answering server binary
//!
//! Run with: cargo run -p report-rag --bin report-rag-server

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report_rag::config::RagConfig;
use report_rag::index::{FlatIndex, VectorIndex};
use report_rag::pipeline::AnswerPipeline;
use report_rag::providers::{EmbeddingProvider, OllamaEmbedder};
use report_rag::server::{state::AppState, RagServer};

#[derive(Parser)]
#[command(name = "report-rag-server", about = "Serve extractive Q&A over an indexed corpus")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = RagConfig::load(args.config.as_deref())?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.embeddings.model);
    tracing::info!("  - Embedding dimensions: {}", config.embeddings.dimensions);
    tracing::info!("  - Index path: {}", config.index.storage_path.display());
    tracing::info!("  - Retrieval top-k: {}", config.retrieval.top_k);

    let embedder = Arc::new(OllamaEmbedder::new(&config.embeddings));

    match embedder.health_check().await {
        Ok(true) => tracing::info!("Ollama is running"),
        _ => {
            tracing::warn!("Ollama not available at {}", config.embeddings.base_url);
            tracing::warn!("Please start Ollama:");
            tracing::warn!("  1. Start: ollama serve");
            tracing::warn!("  2. Pull the model: ollama pull {}", config.embeddings.model);
        }
    }

    // The index must exist before serving; it is never built lazily.
    let index = FlatIndex::load(&config.index.storage_path).map_err(|e| {
        anyhow::anyhow!(
            "failed to load index from {} (run report-rag-ingest first): {}",
            config.index.storage_path.display(),
            e
        )
    })?;
    tracing::info!("Index loaded with {} chunks", index.len());

    let pipeline = AnswerPipeline::new(config.clone(), Arc::new(index), embedder);
    let server = RagServer::new(config, AppState::new(pipeline));

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/query - Ask questions");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
