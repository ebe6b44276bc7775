//! Catalog domain module.
//!
//! This crate contains the data shaping for the product catalog, implemented
//! purely as deterministic logic (no IO, no HTTP, no async runtime):
//! tag grouping, the name/stock filter, and the wire decoder.

pub mod filter;
pub mod group;
pub mod product;
pub mod sample;

pub use filter::{FilterState, ProductFilter};
pub use group::{Catalog, Group, VisibleGroup, group_by_tags};
pub use product::{Product, decode_products};
pub use sample::sample_products;
