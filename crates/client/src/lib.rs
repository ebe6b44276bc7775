//! `shelf-client`
//!
//! **Responsibility:** loading and presenting the product catalog.
//!
//! This crate provides:
//! - The catalog screen state and its reducer (`state`)
//! - Fetching from a static list or an HTTP endpoint (`source`)
//! - An async driver that runs fetches and drops superseded ones (`controller`)
//! - A plain-text render of the visible groups (`render`)
//! - The interactive input loop behind the `shelf` binary (`repl`)

pub mod config;
pub mod controller;
pub mod input;
pub mod offline;
pub mod render;
pub mod repl;
pub mod source;
pub mod state;
pub mod types;

pub use config::ClientConfig;
pub use controller::{ControllerError, LoadController, StateSnapshot};
pub use offline::ServiceWorker;
pub use render::render;
pub use source::{CatalogClient, FetchError};
pub use state::{CatalogEffect, CatalogMsg, CatalogState};
pub use types::{CatalogSource, LoadError, LoadState};
