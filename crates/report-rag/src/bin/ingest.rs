//! Corpus ingestion binary: load documents, chunk, embed, persist the index
//!
//! Run with: cargo run -p report-rag --bin report-rag-ingest -- --docs docs/

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report_rag::config::RagConfig;
use report_rag::index::{FlatIndex, VectorIndex};
use report_rag::ingestion;
use report_rag::providers::{EmbeddingProvider, OllamaEmbedder};

#[derive(Parser)]
#[command(name = "report-rag-ingest", about = "Build the vector index from a document folder")]
struct Args {
    /// Directory containing source documents (.pdf, .txt, .md)
    #[arg(long, default_value = "docs")]
    docs: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delete any existing index before building
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report_rag=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = RagConfig::load(args.config.as_deref())?;

    if args.reset && config.index.storage_path.exists() {
        tracing::info!("Removing existing index at {}", config.index.storage_path.display());
        std::fs::remove_file(&config.index.storage_path)?;
    }

    let embedder = OllamaEmbedder::new(&config.embeddings);
    if !embedder.health_check().await? {
        anyhow::bail!(
            "Ollama not reachable at {}; start it with `ollama serve` and pull {}",
            config.embeddings.base_url,
            config.embeddings.model
        );
    }

    tracing::info!("Loading documents from {}", args.docs.display());
    let chunks = ingestion::build_chunks(&args.docs, &config)?;
    tracing::info!("Split corpus into {} chunks", chunks.len());

    tracing::info!("Embedding chunks with {}", config.embeddings.model);
    let index = FlatIndex::build(chunks, &embedder).await?;

    index.save(&config.index.storage_path)?;
    tracing::info!(
        "Saved index with {} chunks to {}",
        index.len(),
        config.index.storage_path.display()
    );

    Ok(())
}
