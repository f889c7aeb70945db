//! Plain HTTP GET used for metadata queries and image downloads.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request to {0} timed out")]
    Timeout(String),
}

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl FetchedResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError>;
}

/// [`HttpFetch`] over a shared reqwest client with a fixed timeout.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("library-maintenance/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| classify(url, e))?;

        Ok(FetchedResponse { status, body })
    }
}

/// Timeouts can fire while sending or while reading the body.
fn classify(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Request(error)
    }
}
