//! Ingestion stages: fetch a page, extract its text, chunk it.
//!
//! * [`fetch`] — single-shot HTTP retrieval of a source page.
//! * [`extract`] — HTML to plain-text conversion.
//! * [`chunk`] — bounded, overlapping character chunking.

pub mod chunk;
pub mod extract;
pub mod fetch;

pub use chunk::{Chunker, ChunkerConfig, TextSegment};
pub use extract::extract_text;
pub use fetch::{Document, fetch_page, http_client};
