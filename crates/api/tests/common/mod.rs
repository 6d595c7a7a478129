//! Shared fixtures for API integration tests.
//!
//! Provides in-memory completion providers and job stores that record every
//! call, plus request/response helpers that drive the real router through
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use blendair_api::config::{CompletionSettings, ServerConfig, StoreSettings};
use blendair_api::router::build_app_router;
use blendair_api::state::AppState;
use blendair_completion::{CompletionError, CompletionProvider, ScriptCompletion};
use blendair_core::job::NewJob;
use blendair_store::{JobStore, StoreError};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Completion provider returning a canned reply and recording requests.
pub struct FakeCompletion {
    reply: Result<String, u16>,
    delay: Option<Duration>,
    pub requests: Mutex<Vec<ScriptCompletion>>,
}

impl FakeCompletion {
    pub fn replying(script: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(script.to_string()),
            delay: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A provider that takes `delay` before answering with `script`.
    pub fn slow(script: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(script.to_string()),
            delay: Some(delay),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A provider that answers every request with the given HTTP status.
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            delay: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for FakeCompletion {
    async fn complete(&self, request: &ScriptCompletion) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Ok(script) => Ok(script.clone()),
            Err(status) => Err(CompletionError::Api {
                status: *status,
                body: "upstream said no".into(),
            }),
        }
    }
}

/// Job store recording inserted rows, optionally rejecting them.
pub struct FakeStore {
    reject: bool,
    pub jobs: Mutex<Vec<NewJob>>,
}

impl FakeStore {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            reject: false,
            jobs: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            reject: true,
            jobs: Mutex::new(Vec::new()),
        })
    }

    pub fn inserted(&self) -> Vec<NewJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobStore for FakeStore {
    async fn insert_job(&self, job: &NewJob) -> Result<(), StoreError> {
        self.jobs.lock().unwrap().push(job.clone());
        if self.reject {
            return Err(StoreError::Api {
                status: 500,
                body: "insert failed".into(),
            });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<bool, StoreError> {
        Ok(!self.reject)
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and no credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: None,
        upstream_timeout_secs: None,
        completion: CompletionSettings {
            api_key: None,
            base_url: "http://127.0.0.1:9/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 300,
        },
        store: StoreSettings {
            url: None,
            service_key: None,
            table: "jobs".to_string(),
        },
    }
}

/// Build the full router around the given providers.
pub fn build_test_app(
    completion: Option<Arc<FakeCompletion>>,
    store: Option<Arc<FakeStore>>,
) -> Router {
    build_test_app_with_config(test_config(), completion, store)
}

/// Build the full router with an explicit configuration.
pub fn build_test_app_with_config(
    config: ServerConfig,
    completion: Option<Arc<FakeCompletion>>,
    store: Option<Arc<FakeStore>>,
) -> Router {
    let state = AppState {
        config: Arc::new(config),
        completion: completion.map(|c| c as Arc<dyn CompletionProvider>),
        store: store.map(|s| s as Arc<dyn JobStore>),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body with no content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
