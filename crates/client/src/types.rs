//! Load-state types shared by the reducer, the controller and the renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shelf_catalog::Catalog;

/// Where the products come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built-in list; resolves without IO.
    Static(Vec<shelf_catalog::Product>),
    /// JSON document (array of products) fetched with GET.
    Url(String),
}

impl CatalogSource {
    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self::Static(shelf_catalog::sample_products())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Static(products) => format!("static ({} products)", products.len()),
            CatalogSource::Url(url) => url.clone(),
        }
    }
}

/// Why a load failed, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LoadError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Network { status: u16, message: String },
    /// The request or the body decode failed.
    #[error("{message}")]
    Transport { message: String },
}

impl LoadError {
    pub fn message(&self) -> &str {
        match self {
            LoadError::Network { message, .. } | LoadError::Transport { message } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Network { status, .. } => Some(*status),
            LoadError::Transport { .. } => None,
        }
    }
}

/// Load lifecycle; exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Catalog),
    Failed(LoadError),
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
