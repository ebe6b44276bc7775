//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Covers deterministic data failures only (malformed records, broken
/// uniqueness). Transport failures live in the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record failed validation (e.g. empty name, no tags).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two products share the same name.
    #[error("duplicate product: {0}")]
    DuplicateProduct(String),

    /// A catalog document could not be decoded.
    #[error("malformed catalog document: {0}")]
    Decode(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateProduct(name.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            CatalogError::validation("product name must not be empty").to_string(),
            "validation failed: product name must not be empty"
        );
        assert_eq!(
            CatalogError::duplicate("Football").to_string(),
            "duplicate product: Football"
        );
    }
}
