//! Process configuration loaded once at startup.

use serde::{Deserialize, Serialize};
use std::env;

use crate::types::RagError;

/// Default embedding model used when `RAGLINE_EMBEDDING_MODEL` is unset.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-large";

/// Default completion model used when `RAGLINE_COMPLETION_MODEL` is unset.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o";

/// Default directory both binaries use when no index location is given.
pub const DEFAULT_INDEX_DIR: &str = "./knowledge_base";

/// Credentials and model identifiers for the OpenAI provider.
///
/// Loaded once from the environment and passed explicitly into the components
/// that need it; nothing in the pipeline reads ambient global state, so tests
/// can construct this with fake values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub embedding_model: String,
    pub completion_model: String,
}

impl ProviderConfig {
    /// Reads configuration from the environment, honoring a `.env` file.
    ///
    /// `OPENAI_API_KEY` is required; a missing key fails here rather than on
    /// the first provider call. Model identifiers fall back to the defaults
    /// above.
    pub fn from_env() -> Result<Self, RagError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            RagError::Config("OPENAI_API_KEY environment variable not found".to_string())
        })?;

        let embedding_model = env::var("RAGLINE_EMBEDDING_MODEL")
            .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());

        let completion_model = env::var("RAGLINE_COMPLETION_MODEL")
            .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string());

        Ok(Self {
            api_key,
            embedding_model,
            completion_model,
        })
    }

    /// Builds a configuration with explicit values, bypassing the environment.
    pub fn new(
        api_key: impl Into<String>,
        embedding_model: impl Into<String>,
        completion_model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            embedding_model: embedding_model.into(),
            completion_model: completion_model.into(),
        }
    }
}
