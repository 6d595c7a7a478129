use std::num::NonZeroU32;

use blendair_completion::client::DEFAULT_BASE_URL;
use blendair_core::prompt::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use blendair_store::DEFAULT_JOBS_TABLE;

/// A configuration variable holding a value that cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': expected {expected}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Completion provider settings.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    /// Provider credential. Requests fail with 500 while this is unset.
    pub api_key: Option<String>,
    /// OpenAI-compatible API root.
    pub base_url: String,
    /// Model used for every request.
    pub model: String,
    /// Output cap in tokens.
    pub max_tokens: u32,
}

/// Job store settings. Job enqueueing is enabled only when both the URL
/// and the service key are set.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub url: Option<String>,
    pub service_key: Option<String>,
    pub table: String,
}

impl StoreSettings {
    /// URL and key, if both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.url.as_deref()?, self.service_key.as_deref()?))
    }
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and injected into handlers through
/// [`AppState`](crate::state::AppState); handlers never read the
/// environment themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Whole-request timeout in seconds. Unset means requests run until the
    /// upstream clients finish or fail.
    pub request_timeout_secs: Option<u64>,
    /// Timeout applied to each outbound HTTP call, if set.
    pub upstream_timeout_secs: Option<u64>,
    pub completion: CompletionSettings,
    pub store: StoreSettings,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `HOST`                  | `0.0.0.0`                   |
    /// | `PORT`                  | `3000`                      |
    /// | `CORS_ORIGINS`          | `*`                         |
    /// | `REQUEST_TIMEOUT_SECS`  | unset                       |
    /// | `UPSTREAM_TIMEOUT_SECS` | unset                       |
    /// | `OPENAI_API_KEY`        | unset                       |
    /// | `OPENAI_BASE_URL`       | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`          | `gpt-4o-mini`               |
    /// | `OPENAI_MAX_TOKENS`     | `300`                       |
    /// | `SUPABASE_URL`          | unset                       |
    /// | `SUPABASE_SERVICE_ROLE` | unset                       |
    /// | `JOBS_TABLE`            | `jobs`                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(get("PORT"), "PORT", 3000u16, "a port number")?;

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: Option<u64> = get("REQUEST_TIMEOUT_SECS")
            .map(|v| parse_value(v, "REQUEST_TIMEOUT_SECS", "a number of seconds"))
            .transpose()?;

        let upstream_timeout_secs: Option<u64> = get("UPSTREAM_TIMEOUT_SECS")
            .map(|v| parse_value(v, "UPSTREAM_TIMEOUT_SECS", "a number of seconds"))
            .transpose()?;

        let max_tokens = get("OPENAI_MAX_TOKENS")
            .map(|v| parse_value::<NonZeroU32>(v, "OPENAI_MAX_TOKENS", "a positive token count"))
            .transpose()?
            .map_or(DEFAULT_MAX_TOKENS, NonZeroU32::get);

        let completion = CompletionSettings {
            api_key: get("OPENAI_API_KEY"),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            max_tokens,
        };

        let store = StoreSettings {
            url: get("SUPABASE_URL"),
            service_key: get("SUPABASE_SERVICE_ROLE"),
            table: get("JOBS_TABLE").unwrap_or_else(|| DEFAULT_JOBS_TABLE.into()),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_timeout_secs,
            completion,
            store,
        })
    }
}

fn parse_value<T: std::str::FromStr>(
    value: String,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        value,
        expected,
    })
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => parse_value(v, var, expected),
        None => Ok(default),
    }
}
