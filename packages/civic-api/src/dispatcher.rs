//! Request dispatcher.
//!
//! Decides per call whether data comes from the backend or from a mock
//! generator, and hides that decision from callers:
//!
//! 1. mocks enabled and fallback allowed: serve the mock, no network
//! 2. otherwise try the backend
//! 3. a failed backend call is either recovered with the mock or surfaced,
//!    depending on `disable_mock_fallback`; a missing base URL always falls
//!    back to the mock
//!
//! Mock generator errors (e.g. `NotFound`) always propagate.

use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::transport::{
    BaseHttpTransport, FormPart, HttpMethod, HttpRequest, ReqwestTransport, RequestBody,
};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-call request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<HttpMethod>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    /// Never substitute mock data: force a real call and surface its failure.
    pub disable_mock_fallback: bool,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post_json(body: serde_json::Value) -> Self {
        Self {
            method: Some(HttpMethod::Post),
            body: RequestBody::Json(body),
            ..Default::default()
        }
    }

    pub fn post_multipart(parts: Vec<FormPart>) -> Self {
        Self {
            method: Some(HttpMethod::Post),
            body: RequestBody::Multipart(parts),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn disable_mock_fallback(mut self) -> Self {
        self.disable_mock_fallback = true;
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method.unwrap_or(HttpMethod::Get)
    }

    /// JSON content type merged with caller headers. A caller-supplied
    /// Content-Type replaces the default; multipart bodies get none so the
    /// transport can set the boundary.
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let caller_sets_content_type = self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));

        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        if !caller_sets_content_type && !self.body.is_multipart() {
            headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
        }
        headers.extend(self.headers.iter().cloned());
        headers
    }
}

/// Outcome of a remote attempt. The fallback decision is a match on this.
#[derive(Debug)]
pub enum DispatchOutcome<T> {
    Ok(T),
    /// Serve mock data instead.
    RecoverableFailure(ApiError),
    /// Surface to the caller.
    FatalFailure(ApiError),
}

/// Join base URL and path with exactly one separating slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Clone)]
pub struct ApiDispatcher {
    config: ApiConfig,
    transport: Arc<dyn BaseHttpTransport>,
    strict: bool,
}

impl ApiDispatcher {
    pub fn new(config: ApiConfig, transport: Arc<dyn BaseHttpTransport>) -> Self {
        Self {
            config,
            transport,
            strict: false,
        }
    }

    /// Apply `disable_mock_fallback` to every call made through this dispatcher.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Dispatcher backed by a plain reqwest client.
    pub fn with_reqwest(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> Option<&str> {
        self.config.base_url()
    }

    pub fn use_mocks(&self) -> bool {
        self.config.use_mocks()
    }

    /// Resolve `path` to a typed result, from the backend or from `mock_fallback`.
    pub async fn dispatch<T, F, Fut>(
        &self,
        path: &str,
        mock_fallback: F,
        mut options: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        options.disable_mock_fallback |= self.strict;

        if self.config.use_mocks() && !options.disable_mock_fallback {
            debug!(path, "Serving mock data");
            return mock_fallback().await;
        }

        match self.fetch_remote(path, options).await {
            DispatchOutcome::Ok(value) => Ok(value),
            DispatchOutcome::RecoverableFailure(ApiError::MissingBaseUrl) => {
                warn!(path, "API base URL missing; falling back to mock data");
                mock_fallback().await
            }
            DispatchOutcome::RecoverableFailure(error) => {
                warn!(path, error = %error, "Request failed; using mock data instead");
                mock_fallback().await
            }
            DispatchOutcome::FatalFailure(error) => {
                debug!(path, error = %error, "Request failed; mock fallback disabled");
                Err(error)
            }
        }
    }

    async fn fetch_remote<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> DispatchOutcome<T> {
        let strict = options.disable_mock_fallback;

        // Nothing to call: mock data is served even when fallback is disabled.
        let Some(base_url) = self.config.base_url() else {
            return DispatchOutcome::RecoverableFailure(ApiError::MissingBaseUrl);
        };

        let request = HttpRequest {
            method: options.method(),
            url: join_url(base_url, path),
            headers: options.merged_headers(),
            body: options.body,
        };

        match self.execute(request).await {
            Ok(value) => DispatchOutcome::Ok(value),
            Err(error) if strict => DispatchOutcome::FatalFailure(error),
            Err(error) => DispatchOutcome::RecoverableFailure(error),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        debug!(method = request.method.as_str(), url = %request.url, "Sending API request");

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::Decode(format!("Failed to decode response: {}", e)))
    }
}
