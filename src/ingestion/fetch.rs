//! Fetching the source page ahead of text extraction.

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::types::RagError;

/// A fetched page: the source URL and its raw markup.
///
/// Consumed once by [`crate::ingestion::extract_text`]; not retained after
/// chunking.
#[derive(Debug, Clone)]
pub struct Document {
    pub url: Url,
    pub html: String,
}

/// Builds the HTTP client used for ingestion fetches.
pub fn http_client() -> Result<Client, RagError> {
    let client = Client::builder()
        .user_agent(concat!("ragline/", env!("CARGO_PKG_VERSION")))
        .use_rustls_tls()
        .build()?;
    Ok(client)
}

/// Fetches the document behind `url`.
///
/// The pipeline issues exactly one fetch per ingestion run and awaits it
/// fully before the next stage. Network failures and non-success HTTP
/// statuses propagate as [`RagError::Http`] and are fatal to the run.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<Document, RagError> {
    debug!(%url, "fetching page");
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let html = response.text().await?;
    info!(%url, bytes = html.len(), "fetched page");
    Ok(Document {
        url: url.clone(),
        html,
    })
}
