//! Completion provider seam and its OpenAI-compatible implementation.

pub mod client;
pub mod messages;

use async_trait::async_trait;

pub use client::{CompletionError, OpenAiClient};
pub use messages::ScriptCompletion;

/// Something that turns a prompt into generated text.
///
/// The API handler only depends on this trait, so tests can substitute an
/// in-memory provider for the HTTP client.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion and return the first candidate's text.
    ///
    /// A response without any content yields an empty string, not an error.
    async fn complete(&self, request: &ScriptCompletion) -> Result<String, CompletionError>;
}
