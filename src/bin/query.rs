//! Query entry point: answer a question from the knowledge index.
//!
//! ```bash
//! query <question> [index-dir]
//! ```
//!
//! Prints the model's answer to stdout. The index directory defaults to
//! `./knowledge_base` and must have been built with the same embedding
//! model configured for this run.

use std::env;
use std::path::PathBuf;

use rig::client::{CompletionClient, EmbeddingsClient};
use rig::providers::openai;
use tracing_subscriber::FmtSubscriber;

use ragline::completion::ModelCompleter;
use ragline::config::{DEFAULT_INDEX_DIR, ProviderConfig};
use ragline::pipeline::answer;
use ragline::types::RagError;

#[tokio::main]
async fn main() -> Result<(), RagError> {
    init_tracing();

    let mut args = env::args().skip(1);
    let question = args
        .next()
        .ok_or_else(|| RagError::Config("usage: query <question> [index-dir]".to_string()))?;
    let location = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_DIR));

    let config = ProviderConfig::from_env()?;

    let openai_client: openai::Client =
        openai::Client::new(&config.api_key).expect("failed to build OpenAI client");
    let model = openai_client.embedding_model(&config.embedding_model);
    let completer = ModelCompleter::new(openai_client.completion_model(&config.completion_model));

    let reply = answer(
        model,
        &config.embedding_model,
        &location,
        &question,
        &completer,
    )
    .await?;

    println!("{reply}");

    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_env_filter("info").finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
