//! Typed clients for the managed document store.
//!
//! Thin REST clients, pure consumers of the store's HTTP interface; the
//! prompt gateway never touches these — only the surrounding user and
//! session services do. The store owns ids, server timestamps and the
//! consistency model.

pub mod sessions;
pub mod users;

pub use sessions::SessionStore;
pub use users::UserStore;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::StoreError;

/// Shared HTTP plumbing for the store clients.
#[derive(Clone)]
pub struct StoreClient {
    base_url: String,
    auth_token: Option<String>,
    http_client: Client,
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Error body the store returns on failed requests.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    error: StoreErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StoreErrorDetail {
    message: String,
}

impl StoreClient {
    /// Client for a store rooted at `base_url`, with optional bearer auth.
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token,
            http_client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// The store base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Sends a request and maps non-success statuses to [`StoreError`].
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        let message = serde_json::from_str::<StoreErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);
        Err(StoreError::ApiError { code, message })
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client.get(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client.put(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client.post(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client.delete(self.url(path))
    }
}
