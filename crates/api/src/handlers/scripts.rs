//! Handler for script generation.
//!
//! One request makes at most two outbound calls, strictly in order: the
//! completion provider, then (only if fully configured and targeted) the
//! job store insert. Nothing is retried.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use blendair_completion::ScriptCompletion;
use blendair_core::error::CoreError;
use blendair_core::job::NewJob;
use blendair_core::request::ScriptRequest;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
}

/// Parse the raw body regardless of its declared content type.
fn parse_request(body: &[u8]) -> AppResult<ScriptRequest> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::BadRequest("Invalid JSON body".into())
    })
}

/// POST /generate_script
///
/// Turn a prompt into a script. When the job store is configured and the
/// request carries both `project_id` and `model_id`, the script is also
/// queued as a job; otherwise that step is skipped without notice.
pub async fn generate_script(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ScriptResponse>> {
    let request = parse_request(&body)?;
    let prompt = request.prompt()?;

    let completion = state
        .completion
        .as_ref()
        .ok_or_else(|| CoreError::Configuration("Missing OPENAI_API_KEY".into()))?;

    let settings = &state.config.completion;
    let script = completion
        .complete(&ScriptCompletion::new(
            settings.model.as_str(),
            settings.max_tokens,
            prompt,
        ))
        .await?;

    let enqueued = match (&state.store, request.job_target()) {
        (Some(store), Some((project_id, model_id))) => {
            let job =
                NewJob::queued_prompt(project_id.clone(), model_id.clone(), prompt, script.as_str());
            store.insert_job(&job).await?;
            tracing::info!(%project_id, %model_id, "Prompt job queued");
            true
        }
        _ => false,
    };

    tracing::info!(
        prompt_len = prompt.len(),
        script_len = script.len(),
        enqueued,
        "Script generated",
    );

    Ok(Json(ScriptResponse { script }))
}
