//! Inbound request payload.

use serde::Deserialize;

use crate::error::CoreError;
use crate::identifier::Identifier;

/// Body of a script generation request.
///
/// Every field is optional at the serde level so that a missing `prompt`
/// surfaces as a [`CoreError::Validation`] rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub project_id: Option<Identifier>,
    #[serde(default)]
    pub model_id: Option<Identifier>,
}

impl ScriptRequest {
    /// The prompt text, or a validation error if it is missing or empty.
    pub fn prompt(&self) -> Result<&str, CoreError> {
        match self.prompt.as_deref() {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(CoreError::Validation("Missing prompt".into())),
        }
    }

    /// Both identifiers, if and only if both are present.
    pub fn job_target(&self) -> Option<(&Identifier, &Identifier)> {
        let project_id = self.project_id.as_ref().filter(|id| id.is_present())?;
        let model_id = self.model_id.as_ref().filter(|id| id.is_present())?;
        Some((project_id, model_id))
    }
}
