//! Integration tests for index build, load, and top-1 retrieval, running
//! entirely against deterministic mock embedding models.

mod common;

use tempfile::tempdir;

use common::{ConstantEmbeddingModel, KEYWORD_MODEL_ID, KeywordEmbeddingModel};
use ragline::index::{build_index, open_index};
use ragline::ingestion::TextSegment;
use ragline::retrieval::{NO_CONTEXT_SENTINEL, retrieve};
use ragline::types::RagError;

fn segments(contents: &[&str]) -> Vec<TextSegment> {
    contents
        .iter()
        .enumerate()
        .map(|(index, content)| TextSegment {
            index,
            content: content.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn query_identical_to_a_segment_returns_that_segment() {
    let dir = tempdir().unwrap();
    let model = KeywordEmbeddingModel;
    let corpus = [
        "Kohli scored 76 runs in the final.",
        "The match was rain-affected.",
        "Cricket cup finals draw big crowds.",
    ];

    build_index(&model, KEYWORD_MODEL_ID, segments(&corpus), dir.path())
        .await
        .unwrap();

    let index = open_index(model, KEYWORD_MODEL_ID, dir.path())
        .await
        .unwrap();
    for segment in corpus {
        let context = retrieve(&index, segment).await.unwrap();
        assert_eq!(context, segment);
    }
}

#[tokio::test]
async fn kohli_query_retrieves_the_scoring_segment() {
    let dir = tempdir().unwrap();
    let model = KeywordEmbeddingModel;
    let corpus = [
        "Kohli scored 76 runs in the final.",
        "The match was rain-affected.",
    ];

    build_index(&model, KEYWORD_MODEL_ID, segments(&corpus), dir.path())
        .await
        .unwrap();

    let index = open_index(model, KEYWORD_MODEL_ID, dir.path())
        .await
        .unwrap();
    let context = retrieve(&index, "What did Kohli score?").await.unwrap();
    assert_eq!(context, "Kohli scored 76 runs in the final.");
}

#[tokio::test]
async fn empty_index_yields_the_sentinel_not_an_error() {
    let dir = tempdir().unwrap();
    let model = KeywordEmbeddingModel;

    let written = build_index(&model, KEYWORD_MODEL_ID, Vec::new(), dir.path())
        .await
        .unwrap();
    assert_eq!(written, 0);

    let index = open_index(model, KEYWORD_MODEL_ID, dir.path())
        .await
        .unwrap();
    assert_eq!(index.len().await.unwrap(), 0);

    let context = retrieve(&index, "anything at all").await.unwrap();
    assert_eq!(context, NO_CONTEXT_SENTINEL);
}

#[tokio::test]
async fn equidistant_segments_resolve_to_insertion_order() {
    let dir = tempdir().unwrap();
    let model = ConstantEmbeddingModel;
    let corpus = ["first inserted", "second inserted", "third inserted"];

    build_index(&model, "constant-test-model", segments(&corpus), dir.path())
        .await
        .unwrap();

    let index = open_index(model, "constant-test-model", dir.path())
        .await
        .unwrap();
    // Every segment is equidistant from the query under this model; the
    // earliest inserted one must win, on every run.
    for _ in 0..3 {
        let context = retrieve(&index, "whatever").await.unwrap();
        assert_eq!(context, "first inserted");
    }
}

#[tokio::test]
async fn loading_with_a_different_model_id_is_rejected() {
    let dir = tempdir().unwrap();
    let model = KeywordEmbeddingModel;

    build_index(
        &model,
        KEYWORD_MODEL_ID,
        segments(&["some content"]),
        dir.path(),
    )
    .await
    .unwrap();

    let err = open_index(model, "some-other-model", dir.path())
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::ModelMismatch { .. }));
}

#[tokio::test]
async fn loading_with_different_dimensions_is_rejected() {
    let dir = tempdir().unwrap();
    let model = KeywordEmbeddingModel;

    build_index(
        &model,
        KEYWORD_MODEL_ID,
        segments(&["some content"]),
        dir.path(),
    )
    .await
    .unwrap();

    // Same identifier, different vector width: still incompatible.
    let err = open_index(ConstantEmbeddingModel, KEYWORD_MODEL_ID, dir.path())
        .await
        .unwrap_err();
    assert!(matches!(err, RagError::ModelMismatch { .. }));
}

#[tokio::test]
async fn rebuilding_overwrites_the_previous_index() {
    let dir = tempdir().unwrap();
    let model = KeywordEmbeddingModel;

    build_index(
        &model,
        KEYWORD_MODEL_ID,
        segments(&["old content about the cup", "more old content"]),
        dir.path(),
    )
    .await
    .unwrap();

    build_index(
        &model,
        KEYWORD_MODEL_ID,
        segments(&["fresh content about the rain"]),
        dir.path(),
    )
    .await
    .unwrap();

    let index = open_index(model, KEYWORD_MODEL_ID, dir.path())
        .await
        .unwrap();
    assert_eq!(index.len().await.unwrap(), 1);

    let context = retrieve(&index, "rain").await.unwrap();
    assert_eq!(context, "fresh content about the rain");
}
