//! Client configuration from the environment.

use std::time::Duration;

use crate::types::CatalogSource;

/// Env var naming the catalog document URL; unset means the built-in list.
pub const CATALOG_URL_VAR: &str = "SHELF_CATALOG_URL";
/// Env var with a per-request timeout in whole seconds; unset means none.
pub const REQUEST_TIMEOUT_VAR: &str = "SHELF_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub catalog_url: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in `from_env`).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_url = lookup(CATALOG_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if catalog_url.is_none() {
            tracing::info!("{CATALOG_URL_VAR} not set; using built-in catalog");
        }

        let request_timeout = lookup(REQUEST_TIMEOUT_VAR).and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(0) => {
                    tracing::warn!("ignoring {REQUEST_TIMEOUT_VAR}=0: a zero timeout fails every fetch");
                    None
                }
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(err) => {
                    tracing::warn!("ignoring {REQUEST_TIMEOUT_VAR}={raw:?}: {err}");
                    None
                }
            }
        });

        Self {
            catalog_url,
            request_timeout,
        }
    }

    /// Initial data source.
    pub fn source(&self) -> CatalogSource {
        match &self.catalog_url {
            Some(url) => CatalogSource::url(url.clone()),
            None => CatalogSource::sample(),
        }
    }
}
