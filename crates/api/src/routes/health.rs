use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use blendair_store::JobStore;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a completion provider credential is configured.
    pub completion_configured: bool,
    /// Whether job enqueueing is enabled.
    pub store_configured: bool,
    /// Result of the store reachability probe, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_reachable: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    #[serde(default)]
    pub probe: bool,
}

/// GET /health -- reports which integrations are configured.
///
/// With `?probe=true` the job store is also contacted; the completion
/// provider is never called.
async fn health_check(
    State(state): State<AppState>,
    Query(query): Query<HealthQuery>,
) -> Json<HealthResponse> {
    let store_reachable = match (&state.store, query.probe) {
        (Some(store), true) => Some(probe_store(store.as_ref()).await),
        _ => None,
    };

    let status = if store_reachable == Some(false) {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        completion_configured: state.completion.is_some(),
        store_configured: state.store.is_some(),
        store_reachable,
    })
}

async fn probe_store(store: &dyn JobStore) -> bool {
    match store.ping().await {
        Ok(reachable) => reachable,
        Err(e) => {
            tracing::warn!(error = %e, "Job store probe failed");
            false
        }
    }
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
