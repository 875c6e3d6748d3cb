//! Sending the augmented prompt to a language model.

use async_trait::async_trait;
use rig::completion::{CompletionModel, Message};
use rig::message::AssistantContent;

use crate::types::RagError;

/// Narrow completion capability: one prompt in, the model's text answer out.
///
/// Keeping this seam small lets tests substitute a canned completer and
/// keeps pipeline logic independent of any concrete provider.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, RagError>;
}

/// [`Completer`] backed by any rig [`CompletionModel`].
///
/// Sends a single synchronous request per prompt and reads the first
/// completion choice only. No streaming, no retry, no timeout handling;
/// provider errors propagate to the caller.
#[derive(Clone)]
pub struct ModelCompleter<M>
where
    M: CompletionModel,
{
    model: M,
}

impl<M> ModelCompleter<M>
where
    M: CompletionModel,
{
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

#[async_trait]
impl<M> Completer for ModelCompleter<M>
where
    M: CompletionModel,
{
    async fn complete(&self, prompt: &str) -> Result<String, RagError> {
        let request = self
            .model
            .completion_request(Message::user(prompt))
            .build();

        let response = self
            .model
            .completion(request)
            .await
            .map_err(|err| RagError::Completion(err.to_string()))?;

        match response.choice.first() {
            AssistantContent::Text(text) => Ok(text.text),
            other => Err(RagError::Completion(format!(
                "unexpected completion content: {other:?}"
            ))),
        }
    }
}
