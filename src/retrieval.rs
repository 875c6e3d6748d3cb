//! Top-1 retrieval against an opened index.

use rig::embeddings::EmbeddingModel;
use tracing::debug;

use crate::index::KnowledgeIndex;
use crate::types::RagError;

/// Substituted for the retrieved segment when the index holds no entries,
/// so prompt construction never fails on empty retrieval.
pub const NO_CONTEXT_SENTINEL: &str = "No context was found for this query.";

/// Embeds `query` with the index's model and returns the content of the
/// single closest stored segment by cosine distance.
///
/// Exactly one segment is used per query; there is no re-ranking or
/// multi-chunk fusion. An empty index yields [`NO_CONTEXT_SENTINEL`] rather
/// than an error. Equidistant candidates resolve to the earliest inserted
/// segment (see [`crate::store::SqliteChunkStore::search_nearest`]).
pub async fn retrieve<E>(index: &KnowledgeIndex<E>, query: &str) -> Result<String, RagError>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
{
    let mut embeddings = index
        .model()
        .embed_texts(vec![query.to_string()])
        .await
        .map_err(|err| RagError::Embedding(err.to_string()))?;
    let embedding = embeddings
        .pop()
        .ok_or_else(|| RagError::Embedding("provider returned no embedding for query".to_string()))?;
    let query_vector: Vec<f32> = embedding.vec.iter().map(|v| *v as f32).collect();

    let mut hits = index.store().search_nearest(&query_vector, 1).await?;
    match hits.pop() {
        Some((document, distance)) => {
            debug!(chunk_index = document.chunk_index, distance, "retrieved segment");
            Ok(document.content)
        }
        None => {
            debug!("index is empty, substituting sentinel context");
            Ok(NO_CONTEXT_SENTINEL.to_string())
        }
    }
}
