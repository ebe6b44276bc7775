//! `shelf-core` — building blocks shared by the catalog crates.
//!
//! This crate contains **pure** primitives (no IO, no async runtime).

pub mod entity;
pub mod error;
pub mod id;
pub mod reducer;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::RequestId;
pub use reducer::Reducer;
