//! Route definitions for script generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::scripts;
use crate::state::AppState;

/// Script generation routes, mounted at the root.
///
/// The same handler answers on every path a client may have been
/// configured with:
///
/// ```text
/// POST   /generate_script                -> generate_script
/// POST   /functions/v1/generate_script   -> generate_script
/// POST   /generate                       -> generate_script
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate_script", post(scripts::generate_script))
        .route("/functions/v1/generate_script", post(scripts::generate_script))
        .route("/generate", post(scripts::generate_script))
}
