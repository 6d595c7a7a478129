//! HTTP client for an OpenAI-compatible `/chat/completions` endpoint.

use async_trait::async_trait;

use crate::messages::{ChatCompletionRequest, ChatCompletionResponse, ScriptCompletion};
use crate::CompletionProvider;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Errors from the completion API layer.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 2xx with a body that is not a chat completion.
    #[error("Malformed completion response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Chat-completions client authenticated with a bearer API key.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client with its own [`reqwest::Client`].
    ///
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send one chat completion request and decode the reply.
    pub async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &ScriptCompletion) -> Result<String, CompletionError> {
        tracing::debug!(model = %request.model, max_tokens = request.max_tokens, "Requesting completion");
        let reply = self.chat(&ChatCompletionRequest::from(request)).await?;
        Ok(reply.into_first_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = OpenAiClient::new("http://localhost:8000/v1/", "k");
        assert_eq!(client.endpoint(), "http://localhost:8000/v1/chat/completions");
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = CompletionError::Api {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "Completion API error (429): rate limited");
    }
}
