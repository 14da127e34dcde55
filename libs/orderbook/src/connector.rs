//! HTTP connector abstraction.
//!
//! The API client talks to the network through [`HttpConnector`] so tests
//! can substitute a stub; [`ReqwestConnector`] is the production
//! implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Minimal HTTP surface the orderbook client needs
#[async_trait]
pub trait HttpConnector: Send + Sync {
    /// GET `url`, returning the response body on 2xx.
    async fn get(&self, url: &str, headers: &[(String, String)]) -> ApiResult<String>;

    /// POST a JSON `body` to `url`, returning the response body on 2xx.
    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
        headers: &[(String, String)],
    ) -> ApiResult<String>;
}

/// [`HttpConnector`] backed by a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct ReqwestConnector {
    client: reqwest::Client,
}

impl ReqwestConnector {
    pub fn new() -> Self {
        Self::default()
    }

    async fn into_body(response: reqwest::Response) -> ApiResult<String> {
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ApiError::Auth);
        }
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl HttpConnector for ReqwestConnector {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> ApiResult<String> {
        debug!(url, "orderbook GET");
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        Self::into_body(request.send().await?).await
    }

    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
        headers: &[(String, String)],
    ) -> ApiResult<String> {
        debug!(url, "orderbook POST");
        let mut request = self.client.post(url).json(&body);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        Self::into_body(request.send().await?).await
    }
}
