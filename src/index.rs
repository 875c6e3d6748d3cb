//! Building and loading the persisted knowledge index.
//!
//! An index is a directory holding `chunks.sqlite` (layout owned by
//! rig-sqlite and sqlite-vec) and `manifest.json`, a small versioned header
//! owned by this crate. The manifest records which embedding model produced
//! the stored vectors so a mismatched model is rejected at load time instead
//! of silently returning meaningless neighbors.

use std::path::Path;

use rig::embeddings::EmbeddingModel;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::ingestion::TextSegment;
use crate::store::{ChunkDocument, SqliteChunkStore};
use crate::types::RagError;

/// Database file name inside an index directory.
pub const DB_FILE: &str = "chunks.sqlite";

/// Manifest file name inside an index directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest versions this crate can load.
pub const FORMAT_VERSION: u32 = 1;

/// Versioned header describing how an index was built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    pub format_version: u32,
    pub embedding_model: String,
    pub ndims: usize,
}

impl IndexManifest {
    pub fn new(embedding_model: impl Into<String>, ndims: usize) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            embedding_model: embedding_model.into(),
            ndims,
        }
    }

    /// Reads the manifest from an index directory.
    pub async fn read(location: &Path) -> Result<Self, RagError> {
        let path = location.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(RagError::Storage(format!(
                "no index manifest at {} (not an index directory?)",
                path.display()
            )));
        }
        let data = fs::read_to_string(&path).await?;
        serde_json::from_str(&data).map_err(|err| RagError::Storage(err.to_string()))
    }

    /// Writes the manifest into an index directory.
    pub async fn write(&self, location: &Path) -> Result<(), RagError> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|err| RagError::Storage(err.to_string()))?;
        fs::write(location.join(MANIFEST_FILE), serialized).await?;
        Ok(())
    }

    /// Checks the manifest against the model supplied at load time.
    pub fn ensure_compatible(&self, embedding_model: &str, ndims: usize) -> Result<(), RagError> {
        if self.format_version != FORMAT_VERSION {
            return Err(RagError::Storage(format!(
                "unsupported index format version {} (supported: {FORMAT_VERSION})",
                self.format_version
            )));
        }
        if self.embedding_model != embedding_model || self.ndims != ndims {
            return Err(RagError::ModelMismatch {
                expected: format!("{embedding_model} ({ndims} dims)"),
                found: format!("{} ({} dims)", self.embedding_model, self.ndims),
            });
        }
        Ok(())
    }
}

/// An opened, similarity-searchable index.
pub struct KnowledgeIndex<E>
where
    E: EmbeddingModel + 'static,
{
    store: SqliteChunkStore<E>,
    model: E,
    manifest: IndexManifest,
}

impl<E> KnowledgeIndex<E>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
{
    pub fn model(&self) -> &E {
        &self.model
    }

    pub fn manifest(&self) -> &IndexManifest {
        &self.manifest
    }

    pub fn store(&self) -> &SqliteChunkStore<E> {
        &self.store
    }

    /// Number of stored segments.
    pub async fn len(&self) -> Result<usize, RagError> {
        self.store.count().await
    }
}

/// Embeds `segments` and persists a fresh index at `location`.
///
/// Any prior index at the location is overwritten (last writer wins).
/// Segments are embedded in provider-sized batches; provider failures
/// (authentication, quota) surface unmodified and abort the build.
/// Returns the number of segments written.
pub async fn build_index<E>(
    model: &E,
    model_id: &str,
    segments: Vec<TextSegment>,
    location: &Path,
) -> Result<usize, RagError>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
{
    fs::create_dir_all(location).await?;
    for file in [DB_FILE, MANIFEST_FILE] {
        let path = location.join(file);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
    }

    let store = SqliteChunkStore::open(location.join(DB_FILE), model).await?;

    let batch_limit = E::MAX_DOCUMENTS.max(1);
    let mut documents = Vec::with_capacity(segments.len());
    for batch in segments.chunks(batch_limit) {
        let texts: Vec<String> = batch.iter().map(|s| s.content.clone()).collect();
        let embeddings = model
            .embed_texts(texts)
            .await
            .map_err(|err| RagError::Embedding(err.to_string()))?;
        if embeddings.len() != batch.len() {
            return Err(RagError::Embedding(format!(
                "provider returned {} embeddings for {} segments",
                embeddings.len(),
                batch.len()
            )));
        }
        for (segment, embedding) in batch.iter().zip(embeddings) {
            let vec: Vec<f32> = embedding.vec.iter().map(|v| *v as f32).collect();
            documents.push((
                ChunkDocument {
                    id: Uuid::new_v4().to_string(),
                    chunk_index: segment.index,
                    content: segment.content.clone(),
                },
                vec,
            ));
        }
        debug!(embedded = documents.len(), "embedded segment batch");
    }

    let written = documents.len();
    store.add_segments(documents).await?;
    IndexManifest::new(model_id, model.ndims())
        .write(location)
        .await?;

    info!(location = %location.display(), segments = written, "index built");
    Ok(written)
}

/// Opens a previously persisted index.
///
/// The supplied model must match the one recorded in the manifest, or the
/// load fails with [`RagError::ModelMismatch`]. Below the manifest check the
/// stored format is trusted as-is.
pub async fn open_index<E>(
    model: E,
    model_id: &str,
    location: &Path,
) -> Result<KnowledgeIndex<E>, RagError>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
{
    let manifest = IndexManifest::read(location).await?;
    manifest.ensure_compatible(model_id, model.ndims())?;

    let store = SqliteChunkStore::open(location.join(DB_FILE), &model).await?;
    debug!(location = %location.display(), model = %manifest.embedding_model, "index opened");

    Ok(KnowledgeIndex {
        store,
        model,
        manifest,
    })
}
