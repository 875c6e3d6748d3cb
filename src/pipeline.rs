//! The two pipelines, each a single stateless pass through its stages.

use std::path::Path;

use reqwest::Client;
use rig::embeddings::EmbeddingModel;
use tracing::info;
use url::Url;

use crate::completion::Completer;
use crate::index::{build_index, open_index};
use crate::ingestion::{Chunker, extract_text, fetch_page};
use crate::prompt::augmented_prompt;
use crate::retrieval::retrieve;
use crate::types::RagError;

/// Summary of one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub url: Url,
    pub bytes_fetched: usize,
    pub segments_indexed: usize,
}

/// Ingestion pipeline: fetch → extract → chunk → build index.
///
/// Strictly sequential; each stage is awaited fully before the next begins.
/// Any stage failure aborts the run.
pub async fn ingest_url<E>(
    client: &Client,
    url: &Url,
    chunker: &Chunker,
    model: &E,
    model_id: &str,
    location: &Path,
) -> Result<IngestReport, RagError>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
{
    let page = fetch_page(client, url).await?;
    let bytes_fetched = page.html.len();

    let text = extract_text(&page.html);
    let segments = chunker.split(&text);
    info!(segments = segments.len(), "chunked page text");

    let segments_indexed = build_index(model, model_id, segments, location).await?;

    Ok(IngestReport {
        url: url.clone(),
        bytes_fetched,
        segments_indexed,
    })
}

/// Query pipeline: open index → retrieve → build prompt → complete.
///
/// Returns the model's free-text answer. Retrieval against an empty index
/// substitutes the sentinel context, so the completion stage always runs.
pub async fn answer<E, C>(
    model: E,
    model_id: &str,
    location: &Path,
    query: &str,
    completer: &C,
) -> Result<String, RagError>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
    C: Completer,
{
    let index = open_index(model, model_id, location).await?;
    let context = retrieve(&index, query).await?;
    let prompt = augmented_prompt(query, &context);
    completer.complete(&prompt).await
}
