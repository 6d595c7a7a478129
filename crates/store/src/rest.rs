//! PostgREST client for the hosted jobs table.
//!
//! Authenticates every request with the service credential in both the
//! `apikey` header and a bearer `Authorization` header, which is what the
//! hosted REST gateway expects.

use async_trait::async_trait;
use blendair_core::job::NewJob;

use crate::JobStore;

/// Errors from the store REST layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// REST client bound to one store project and table.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
    table: String,
}

impl RestStore {
    /// Create a client with its own [`reqwest::Client`].
    ///
    /// * `base_url` - Project URL, e.g. `https://abc.supabase.co`.
    pub fn new(
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, service_key, table)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            service_key: service_key.into(),
            table: table.into(),
        }
    }

    /// URL of the configured table.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// Map a non-2xx response to [`StoreError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl JobStore for RestStore {
    async fn insert_job(&self, job: &NewJob) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(job)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        tracing::debug!(table = %self.table, "Inserted job row");
        Ok(())
    }

    /// 401 still counts as reachable: the endpoint answered, only the
    /// credential was refused.
    async fn ping(&self) -> Result<bool, StoreError> {
        let response = self
            .authorized(self.client.get(format!("{}/rest/v1/", self.base_url)))
            .send()
            .await?;

        let status = response.status();
        Ok(status.is_success() || status == reqwest::StatusCode::UNAUTHORIZED)
    }
}
