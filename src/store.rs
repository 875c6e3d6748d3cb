//! SQLite-backed vector storage for embedded text segments.
//!
//! The on-disk layout (a `chunks` table plus a `chunks_embeddings` vec0
//! virtual table) is owned by `rig-sqlite` and `sqlite-vec`; this module
//! only loads and saves through those crates, plus one raw nearest-neighbor
//! query they do not expose.

use std::os::raw::c_char;
use std::path::Path;
use std::sync::OnceLock;

use rig::OneOrMany;
use rig::embeddings::{Embedding, EmbeddingModel};
use rig_sqlite::{Column, ColumnValue, SqliteVectorStore, SqliteVectorStoreTable};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tokio_rusqlite::{Connection, ffi};

use crate::types::RagError;

/// One stored text segment, as persisted alongside its embedding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChunkDocument {
    pub id: String,
    #[serde(deserialize_with = "deserialize_chunk_index")]
    pub chunk_index: usize,
    pub content: String,
}

impl SqliteVectorStoreTable for ChunkDocument {
    fn name() -> &'static str {
        "chunks"
    }

    fn schema() -> Vec<Column> {
        vec![
            Column::new("id", "TEXT PRIMARY KEY"),
            Column::new("chunk_index", "TEXT"),
            Column::new("content", "TEXT"),
        ]
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn column_values(&self) -> Vec<(&'static str, Box<dyn ColumnValue>)> {
        vec![
            ("id", Box::new(self.id.clone())),
            ("chunk_index", Box::new(self.chunk_index.to_string())),
            ("content", Box::new(self.content.clone())),
        ]
    }
}

// SQLite hands chunk_index back as TEXT; accept both representations.
fn deserialize_chunk_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(u64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Num(value) => usize::try_from(value)
            .map_err(|_| de::Error::custom(format!("chunk_index {value} does not fit in usize"))),
        Repr::Text(text) => text.parse::<usize>().map_err(|err| {
            de::Error::custom(format!("unable to parse chunk_index '{text}': {err}"))
        }),
    }
}

/// SQLite vector store holding the embedded segments of one index.
#[derive(Clone)]
pub struct SqliteChunkStore<E>
where
    E: EmbeddingModel + 'static,
{
    inner: SqliteVectorStore<E, ChunkDocument>,
    /// Separate handle for the raw queries rig-sqlite does not cover.
    conn: Connection,
}

impl<E> SqliteChunkStore<E>
where
    E: EmbeddingModel + Clone + Send + Sync + 'static,
{
    /// Opens (creating if necessary) the store at `path`.
    pub async fn open(path: impl AsRef<Path>, model: &E) -> Result<Self, RagError> {
        register_sqlite_vec()?;
        let conn = Connection::open(path)
            .await
            .map_err(|err| RagError::Storage(err.to_string()))?;
        conn.call(|conn| {
            let result = conn.query_row("select vec_version()", [], |row| row.get::<_, String>(0));
            match result {
                Ok(_) => Ok(()),
                Err(err) => Err(tokio_rusqlite::Error::Rusqlite(err)),
            }
        })
        .await
        .map_err(|err| RagError::Storage(err.to_string()))?;

        let conn_for_queries = conn.clone();
        let store = SqliteVectorStore::new(conn, model)
            .await
            .map_err(|err| RagError::Storage(err.to_string()))?;
        Ok(Self {
            inner: store,
            conn: conn_for_queries,
        })
    }

    /// Persists segments with their embeddings.
    pub async fn add_segments(
        &self,
        documents: Vec<(ChunkDocument, Vec<f32>)>,
    ) -> Result<(), RagError> {
        if documents.is_empty() {
            return Ok(());
        }
        let mut rows = Vec::with_capacity(documents.len());
        for (doc, embedding) in documents {
            let vec: Vec<f64> = embedding.into_iter().map(f64::from).collect();
            let embed = Embedding {
                document: doc.content.clone(),
                vec,
            };
            rows.push((doc, OneOrMany::one(embed)));
        }
        self.inner
            .add_rows(rows)
            .await
            .map_err(|err| RagError::Storage(err.to_string()))?;
        Ok(())
    }

    /// Nearest segments to `query_embedding` by cosine distance.
    ///
    /// Results come back ordered by ascending distance; equidistant rows are
    /// ordered by `chunk_index`, i.e. original insertion order, so retrieval
    /// is deterministic even on ties.
    pub async fn search_nearest(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<(ChunkDocument, f32)>, RagError> {
        let embedding_json = serde_json::to_string(query_embedding)
            .map_err(|err| RagError::Storage(err.to_string()))?;

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(&format!(
                        "SELECT c.id, c.chunk_index, c.content, \
                         vec_distance_cosine(e.embedding, vec_f32(?)) AS distance \
                         FROM chunks c \
                         JOIN chunks_embeddings e ON c.id = e.id \
                         ORDER BY distance ASC, CAST(c.chunk_index AS INTEGER) ASC \
                         LIMIT {top_k}"
                    ))
                    .map_err(tokio_rusqlite::Error::Rusqlite)?;

                let rows = stmt
                    .query_map([&embedding_json], |row| {
                        let doc = ChunkDocument {
                            id: row.get(0)?,
                            chunk_index: row.get::<_, String>(1)?.parse().unwrap_or(0),
                            content: row.get(2)?,
                        };
                        let distance: f32 = row.get(3)?;
                        Ok((doc, distance))
                    })
                    .map_err(tokio_rusqlite::Error::Rusqlite)?;

                let mut results = Vec::new();
                for row in rows {
                    results.push(row.map_err(tokio_rusqlite::Error::Rusqlite)?);
                }
                Ok(results)
            })
            .await
            .map_err(|err| RagError::Storage(err.to_string()))
    }

    /// Number of stored segments.
    pub async fn count(&self) -> Result<usize, RagError> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row("SELECT COUNT(*) FROM chunks", [], |row| row.get(0))
                    .map_err(tokio_rusqlite::Error::Rusqlite)?;
                Ok(count as usize)
            })
            .await
            .map_err(|err| RagError::Storage(err.to_string()))
    }
}

/// Registers the sqlite-vec extension for every connection in this process.
///
/// `sqlite3_auto_extension` is process-global state, so registration happens
/// exactly once no matter how many stores are opened.
fn register_sqlite_vec() -> Result<(), RagError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

    let result = REGISTERED.get_or_init(|| unsafe {
        type SqliteExtensionInit = unsafe extern "C" fn(
            *mut ffi::sqlite3,
            *mut *mut c_char,
            *const ffi::sqlite3_api_routines,
        ) -> i32;

        let init: unsafe extern "C" fn() = sqlite_vec::sqlite3_vec_init;
        let init_fn: SqliteExtensionInit =
            std::mem::transmute::<unsafe extern "C" fn(), SqliteExtensionInit>(init);
        let rc = ffi::sqlite3_auto_extension(Some(init_fn));
        if rc != ffi::SQLITE_OK {
            Err(format!("failed to register sqlite-vec extension (code {rc})"))
        } else {
            Ok(())
        }
    });

    result.clone().map_err(RagError::Storage)
}
