//! Fetching product lists from a [`CatalogSource`].

use shelf_catalog::{Product, decode_products, product::ensure_unique_names};
use shelf_core::CatalogError;

use crate::config::ClientConfig;
use crate::types::{CatalogSource, LoadError};

/// HTTP client for catalog documents.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { http })
    }

    /// Resolve `source` to a validated product list.
    pub async fn fetch(&self, source: &CatalogSource) -> Result<Vec<Product>, FetchError> {
        match source {
            CatalogSource::Static(products) => {
                ensure_unique_names(products).map_err(FetchError::Invalid)?;
                Ok(products.clone())
            }
            CatalogSource::Url(url) => self.fetch_url(url).await,
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<Product>, FetchError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let products = decode_products(&body).map_err(FetchError::Invalid)?;
        tracing::debug!(url, products = products.len(), "decoded catalog document");
        Ok(products)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API error ({status}): {reason}")]
    Status { status: u16, reason: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid catalog: {0}")]
    Invalid(CatalogError),
}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { status, reason } => LoadError::Network {
                status,
                message: if reason.is_empty() {
                    format!("HTTP {status}")
                } else {
                    reason
                },
            },
            other => LoadError::Transport {
                message: other.to_string(),
            },
        }
    }
}
