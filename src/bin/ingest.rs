//! Ingestion entry point: scrape a page and build the knowledge index.
//!
//! ```bash
//! ingest <url> [index-dir]
//! ```
//!
//! The index directory defaults to `./knowledge_base`. Exits 0 on success;
//! any stage failure propagates out of `main` with a nonzero exit code.

use std::env;
use std::path::PathBuf;

use rig::client::EmbeddingsClient;
use rig::providers::openai;
use tracing_subscriber::FmtSubscriber;
use url::Url;

use ragline::config::{DEFAULT_INDEX_DIR, ProviderConfig};
use ragline::ingestion::{Chunker, ChunkerConfig, http_client};
use ragline::pipeline::ingest_url;
use ragline::types::RagError;

#[tokio::main]
async fn main() -> Result<(), RagError> {
    init_tracing();

    let mut args = env::args().skip(1);
    let url = args
        .next()
        .ok_or_else(|| RagError::Config("usage: ingest <url> [index-dir]".to_string()))?;
    let location = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_DIR));

    let url = Url::parse(&url).map_err(|err| RagError::InvalidDocument(err.to_string()))?;
    let config = ProviderConfig::from_env()?;

    let client = http_client()?;
    let chunker = Chunker::new(ChunkerConfig::default())?;

    let openai_client: openai::Client =
        openai::Client::new(&config.api_key).expect("failed to build OpenAI client");
    let model = openai_client.embedding_model(&config.embedding_model);

    let report = ingest_url(
        &client,
        &url,
        &chunker,
        &model,
        &config.embedding_model,
        &location,
    )
    .await?;

    println!("Ingestion complete for {}", report.url);
    println!(
        "  bytes fetched   : {:.2} KB",
        report.bytes_fetched as f64 / 1024.0
    );
    println!("  segments stored : {}", report.segments_indexed);
    println!("  index location  : {}", location.display());

    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_env_filter("info").finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
