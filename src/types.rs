//! Crate-wide error type shared by every pipeline stage.

use thiserror::Error;

/// Errors surfaced by the ingestion and query pipelines.
///
/// Every stage converges on this enum; the binaries return it from `main`,
/// so any failure terminates the run with a nonzero exit code. The only
/// recovery path in the system is retrieval against an empty index, which
/// substitutes a sentinel string instead of erroring (see
/// [`crate::retrieval`]).
#[derive(Debug, Error)]
pub enum RagError {
    /// Network or HTTP-status failure while fetching a page.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem failure while reading or writing index files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed process configuration (environment, arguments).
    #[error("configuration error: {0}")]
    Config(String),

    /// Chunker configuration that violates its own invariants.
    #[error("invalid chunker configuration: {0}")]
    InvalidConfig(String),

    /// The input document could not be interpreted (e.g. unparsable URL).
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Failure in the SQLite vector store or its sqlite-vec extension.
    #[error("storage error: {0}")]
    Storage(String),

    /// Embedding provider failure, surfaced unmodified.
    #[error("embedding provider error: {0}")]
    Embedding(String),

    /// Completion provider failure, surfaced unmodified.
    #[error("completion provider error: {0}")]
    Completion(String),

    /// A persisted index was built with a different embedding model than the
    /// one supplied at load time.
    #[error("index embedding model mismatch: index was built with {found}, loader supplied {expected}")]
    ModelMismatch { expected: String, found: String },
}
