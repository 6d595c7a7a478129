use std::sync::Arc;
use std::time::Duration;

use blendair_completion::{CompletionProvider, OpenAiClient};
use blendair_store::{JobStore, RestStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Completion provider; `None` when no provider credential is configured.
    pub completion: Option<Arc<dyn CompletionProvider>>,
    /// Job store; `None` when the store URL or service key is missing.
    pub store: Option<Arc<dyn JobStore>>,
}

impl AppState {
    /// Build the HTTP-backed providers described by `config`.
    ///
    /// Both clients share one [`reqwest::Client`].
    pub fn from_config(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.upstream_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let completion = config.completion.api_key.as_ref().map(|key| {
            Arc::new(OpenAiClient::with_client(
                http.clone(),
                config.completion.base_url.clone(),
                key.clone(),
            )) as Arc<dyn CompletionProvider>
        });

        let store = config.store.credentials().map(|(url, key)| {
            Arc::new(RestStore::with_client(
                http.clone(),
                url,
                key,
                config.store.table.clone(),
            )) as Arc<dyn JobStore>
        });

        Ok(Self {
            config: Arc::new(config),
            completion,
            store,
        })
    }
}
