//! Minimal retrieval-augmented generation pipeline.
//!
//! ```text
//! Ingestion:  URL ──► ingestion::fetch ──► ingestion::extract ──► ingestion::chunk
//!                                                                      │
//!                                          index::build_index ◄────────┘
//!                                                 │
//!                               location/ (chunks.sqlite + manifest.json)
//!
//! Query:      location/ ──► index::open_index ──► retrieval::retrieve (top-1)
//!                                                        │
//!             completion::Completer ◄── prompt::augmented_prompt
//! ```
//!
//! Both pipelines are linear, single-request passes: no branching, no retry,
//! no parallelism. Every non-trivial operation is delegated to an external
//! provider behind a narrow seam — `reqwest` for fetching, `scraper` for
//! text extraction, rig's [`EmbeddingModel`](rig::embeddings::EmbeddingModel)
//! for embeddings, `rig-sqlite`/`sqlite-vec` for similarity search, and a
//! [`Completer`](completion::Completer) for the final answer — so tests run
//! against deterministic fakes and production wires OpenAI.

pub mod completion;
pub mod config;
pub mod index;
pub mod ingestion;
pub mod pipeline;
pub mod prompt;
pub mod retrieval;
pub mod store;
pub mod types;

pub use config::ProviderConfig;
pub use ingestion::{Chunker, ChunkerConfig, TextSegment};
pub use pipeline::{IngestReport, answer, ingest_url};
pub use retrieval::NO_CONTEXT_SENTINEL;
pub use types::RagError;
