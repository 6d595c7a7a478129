//! Job records queued for the downstream script runner.

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Job type tag for jobs created from a natural-language prompt.
pub const JOB_TYPE_PROMPT: &str = "prompt";

/// Initial status of a freshly enqueued job.
pub const JOB_STATUS_QUEUED: &str = "queued";

/// A row inserted into the jobs table.
///
/// `result_path` is always `None` at creation; the runner that consumes the
/// queue fills it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub project_id: Identifier,
    pub model_id: Identifier,
    #[serde(rename = "type")]
    pub job_type: String,
    pub input: String,
    pub status: String,
    pub result_path: Option<String>,
    pub script: String,
}

impl NewJob {
    /// Build a queued prompt job for the given target and generated script.
    pub fn queued_prompt(
        project_id: Identifier,
        model_id: Identifier,
        input: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            project_id,
            model_id,
            job_type: JOB_TYPE_PROMPT.to_string(),
            input: input.into(),
            status: JOB_STATUS_QUEUED.to_string(),
            result_path: None,
            script: script.into(),
        }
    }
}
