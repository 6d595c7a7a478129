//! Chat-completions wire types (OpenAI-compatible subset).
//!
//! Only the fields this service sends or reads are modelled. Response
//! fields are all optional so that a sparse or empty reply still decodes
//! and falls back to an empty script.

use serde::{Deserialize, Serialize};

use blendair_core::prompt::SYSTEM_INSTRUCTION;

/// A single script generation request, independent of the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCompletion {
    /// Completion model identifier.
    pub model: String,
    /// Output cap in tokens.
    pub max_tokens: u32,
    /// System instruction placed before the prompt.
    pub system: String,
    /// The caller's prompt, verbatim.
    pub prompt: String,
}

impl ScriptCompletion {
    /// Build a request using the fixed script-safety instruction.
    pub fn new(model: impl Into<String>, max_tokens: u32, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            system: SYSTEM_INSTRUCTION.to_string(),
            prompt: prompt.into(),
        }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role (system, user, assistant).
    pub role: String,
    pub content: String,
}

impl From<&ScriptCompletion> for ChatCompletionRequest {
    fn from(req: &ScriptCompletion) -> Self {
        Self {
            model: req.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: req.system.clone(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: req.prompt.clone(),
                },
            ],
            max_tokens: req.max_tokens,
        }
    }
}

/// Chat completion response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, or an empty string.
    pub fn into_first_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}
