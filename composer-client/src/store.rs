//! Transport primitives: how resource paths become HTTP requests.
//!
//! [`Store`] is the seam the service facade talks through; [`HttpStore`] is
//! the reqwest-backed implementation used outside tests.

use crate::config::StoreConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use composer_model::ServiceErrorProps;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP method of a store request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl FetchMethod {
    /// Returns true for methods that change server state; these carry the
    /// CSRF header when one is configured.
    #[must_use]
    pub fn is_mutation(self) -> bool {
        !matches!(self, FetchMethod::Get)
    }

    /// The method's wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FetchMethod::Get => "GET",
            FetchMethod::Post => "POST",
            FetchMethod::Put => "PUT",
            FetchMethod::Delete => "DELETE",
        }
    }
}

/// Per-request parameters handed to a [`Store`].
#[derive(Debug, Clone, Default)]
pub struct FetchInit {
    pub method: FetchMethod,
    /// JSON body, sent as-is.
    pub body: Option<serde_json::Value>,
}

impl FetchInit {
    /// A plain GET with no body.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying `body` as JSON.
    #[must_use]
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: FetchMethod::Post,
            body: Some(body),
        }
    }
}

/// A transport that resolves resource paths against a configured service.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the configuration requests are resolved against.
    fn config(&self) -> &StoreConfig;

    /// Fetches `path` and decodes the response body as `T`.
    async fn fetch<T>(&self, path: &str, init: FetchInit) -> ClientResult<T>
    where
        T: DeserializeOwned + Send;

    /// Like [`Store::fetch`], but resolves an absent resource to
    /// `not_found()` instead of failing.
    async fn fetch_or<T, F>(&self, path: &str, init: FetchInit, not_found: F) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        F: FnOnce() -> T + Send,
    {
        match self.fetch(path, init).await {
            Err(err) if err.is_not_found() => Ok(not_found()),
            other => other,
        }
    }
}

/// The reqwest-backed [`Store`].
#[derive(Debug, Clone)]
pub struct HttpStore {
    config: StoreConfig,
    client: Client,
}

impl HttpStore {
    /// Creates a store over `config` with a 60s request timeout.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl Store for HttpStore {
    fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn fetch<T>(&self, path: &str, init: FetchInit) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.config.resource_url(path);
        debug!("Requesting {} {}", init.method.as_str(), url);

        let mut request = match init.method {
            FetchMethod::Get => self.client.get(&url),
            FetchMethod::Post => self.client.post(&url),
            FetchMethod::Put => self.client.put(&url),
            FetchMethod::Delete => self.client.delete(&url),
        };

        if let Some(token) = &self.config.oidc {
            request = request.bearer_auth(token);
        }
        if init.method.is_mutation() {
            if let Some(csrf) = &self.config.csrf {
                request = request.header(csrf.key.as_str(), csrf.value.as_str());
            }
        }
        if let Some(body) = &init.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(props) = serde_json::from_str::<ServiceErrorProps>(&body) {
                return Err(ClientError::Service(props));
            }
            return Err(ClientError::Api(format!("{status}: {body}")));
        }

        Ok(response.json::<T>().await?)
    }
}
