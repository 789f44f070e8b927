//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the upstream services and the base URL
//! that `/api/*` requests are forwarded to. Both are cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{BackendConfig, ConfigError};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the upstream client from backend config.
    ///
    /// Only a connect timeout is set: generation requests may legitimately
    /// run for minutes and the browser owns that wait.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(backend: &BackendConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(backend.connect_timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(backend.base_url.as_str()) })
    }
}
