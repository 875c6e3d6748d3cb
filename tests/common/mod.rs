//! Shared fixtures for the integration tests: deterministic embedding
//! models and a completer that needs no network.

#![allow(dead_code)]

use async_trait::async_trait;
use rig::embeddings::embedding::{Embedding, EmbeddingError, EmbeddingModel};

use ragline::completion::Completer;
use ragline::types::RagError;

/// Identifier recorded in manifests built with [`KeywordEmbeddingModel`].
pub const KEYWORD_MODEL_ID: &str = "keyword-test-model";

/// Keywords the test corpus and queries share; one vector dimension each.
const VOCAB: [&str; 8] = [
    "kohli", "score", "run", "final", "match", "rain", "cup", "cricket",
];

/// Deterministic embedding model for offline tests.
///
/// The first dimensions count keyword occurrences, so texts about the same
/// topic land near each other under cosine distance; the trailing dimensions
/// are a small content hash, so distinct texts never share a vector and
/// identical texts always do.
#[derive(Clone)]
pub struct KeywordEmbeddingModel;

impl EmbeddingModel for KeywordEmbeddingModel {
    const MAX_DOCUMENTS: usize = 64;

    fn ndims(&self) -> usize {
        VOCAB.len() + 4
    }

    fn embed_texts(
        &self,
        texts: impl IntoIterator<Item = String> + Send,
    ) -> impl std::future::Future<Output = Result<Vec<Embedding>, EmbeddingError>> + Send {
        let docs: Vec<String> = texts.into_iter().collect();
        async move {
            Ok(docs
                .into_iter()
                .map(|document| Embedding {
                    vec: keyword_vec(&document),
                    document,
                })
                .collect())
        }
    }
}

fn keyword_vec(text: &str) -> Vec<f64> {
    let lower = text.to_lowercase();
    let mut vec: Vec<f64> = VOCAB
        .iter()
        .map(|keyword| lower.matches(keyword).count() as f64)
        .collect();
    vec.extend(hash_dims(&lower));
    vec
}

fn hash_dims(text: &str) -> Vec<f64> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let seed = hasher.finish();
    (0..4)
        .map(|i| {
            let bits = seed.rotate_left(i * 16) & 0xffff;
            0.05 * (bits as f64 / 0xffff as f64 + 0.01)
        })
        .collect()
}

/// Embeds every text to the same vector, so every stored segment is
/// equidistant from every query. Exercises the tie-break rule.
#[derive(Clone)]
pub struct ConstantEmbeddingModel;

impl EmbeddingModel for ConstantEmbeddingModel {
    const MAX_DOCUMENTS: usize = 64;

    fn ndims(&self) -> usize {
        4
    }

    fn embed_texts(
        &self,
        texts: impl IntoIterator<Item = String> + Send,
    ) -> impl std::future::Future<Output = Result<Vec<Embedding>, EmbeddingError>> + Send {
        let docs: Vec<String> = texts.into_iter().collect();
        async move {
            Ok(docs
                .into_iter()
                .map(|document| Embedding {
                    vec: vec![0.5; 4],
                    document,
                })
                .collect())
        }
    }
}

/// Completer that returns the prompt unchanged, so tests can assert on the
/// exact prompt the pipeline produced.
pub struct EchoCompleter;

#[async_trait]
impl Completer for EchoCompleter {
    async fn complete(&self, prompt: &str) -> Result<String, RagError> {
        Ok(prompt.to_string())
    }
}
