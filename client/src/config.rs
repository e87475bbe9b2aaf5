//! Client configuration baked in at build time.
//!
//! Read from `option_env!` so the WASM bundle needs no runtime config fetch:
//!
//! - `DOCSIGHT_BACKEND`: `mock` (default) or `http`
//! - `DOCSIGHT_API_URL`: HTTP backend base URL, default `http://localhost:3001/api`
//! - `DOCSIGHT_API_TIMEOUT_MS`: HTTP request timeout, default 10000
//! - `DOCSIGHT_MOCK_LATENCY`: `on` (default) or `off`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;

/// Which [`crate::net::api::Backend`] implementation the app talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendMode {
    Mock,
    Http,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend: BackendMode,
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Whether the mock backend sleeps before answering.
    pub mock_latency: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendMode::Mock,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            mock_latency: true,
        }
    }
}

impl ClientConfig {
    /// Config from the build environment. Unrecognized values fall back to
    /// defaults with a warning rather than failing the app.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DOCSIGHT_BACKEND"),
            option_env!("DOCSIGHT_API_URL"),
            option_env!("DOCSIGHT_API_TIMEOUT_MS"),
            option_env!("DOCSIGHT_MOCK_LATENCY"),
        )
    }

    pub(crate) fn from_values(
        backend: Option<&str>,
        api_url: Option<&str>,
        timeout_ms: Option<&str>,
        mock_latency: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let backend = match backend.map(|v| v.trim().to_ascii_lowercase()) {
            None => defaults.backend,
            Some(v) => parse_backend(&v).unwrap_or_else(|| {
                log::warn!("unknown DOCSIGHT_BACKEND {v:?}; using mock");
                defaults.backend
            }),
        };
        let api_base_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.api_base_url, |v| v.trim_end_matches('/').to_owned());
        let request_timeout = timeout_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(defaults.request_timeout, Duration::from_millis);
        let mock_latency = mock_latency.and_then(parse_switch).unwrap_or(defaults.mock_latency);

        Self { backend, api_base_url, request_timeout, mock_latency }
    }
}

fn parse_backend(raw: &str) -> Option<BackendMode> {
    match raw {
        "mock" => Some(BackendMode::Mock),
        "http" => Some(BackendMode::Http),
        _ => None,
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
