use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use shelf_core::{CatalogError, CatalogResult, Entity};

/// A single catalog entry.
///
/// Immutable once built; the name is the identity within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    price: String,
    stocked: bool,
    tags: BTreeSet<String>,
}

/// Wire shape of a product, before validation.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    price: String,
    stocked: bool,
    tags: Vec<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.name, record.price, record.stocked, record.tags)
    }
}

impl Product {
    /// Build a product, rejecting an empty name or an empty tag set.
    pub fn new<I, T>(
        name: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
        tags: I,
    ) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::validation("product name must not be empty"));
        }

        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(CatalogError::validation(format!(
                "product {name:?} must carry at least one tag"
            )));
        }

        Ok(Self {
            name,
            price: price.into(),
            stocked,
            tags,
        })
    }

    /// Build a product from a row already known to be valid.
    pub(crate) fn from_static(name: &str, price: &str, stocked: bool, tags: &[&str]) -> Self {
        debug_assert!(!name.trim().is_empty() && !tags.is_empty());
        Self {
            name: name.to_owned(),
            price: price.to_owned(),
            stocked,
            tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display price, passed through untouched (e.g. `"$49.99"`).
    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn stocked(&self) -> bool {
        self.stocked
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

/// Reject a list in which two products share a name.
pub fn ensure_unique_names(products: &[Product]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id()) {
            return Err(CatalogError::duplicate(product.name()));
        }
    }
    Ok(())
}

/// Decode a catalog document: a JSON array of products.
///
/// Every record is validated, and names must be unique across the array.
pub fn decode_products(body: &[u8]) -> CatalogResult<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_slice(body).map_err(|e| CatalogError::decode(e.to_string()))?;
    ensure_unique_names(&products)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_name() {
        let err = Product::new("  ", "$1.00", true, ["Toys"]).unwrap_err();
        match err {
            CatalogError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_rejects_missing_tags() {
        let err = Product::new("Yo-yo", "$1.00", true, Vec::<String>::new()).unwrap_err();
        match err {
            CatalogError::Validation(_) => {}
            _ => panic!("Expected Validation error for missing tags"),
        }
    }

    #[test]
    fn duplicate_tags_collapse() {
        let product = Product::new("Yo-yo", "$1.00", true, ["Toys", "Toys"]).unwrap();
        assert_eq!(product.tags().len(), 1);
        assert!(product.has_tag("Toys"));
    }

    #[test]
    fn entity_id_is_the_name() {
        let product = Product::new("Yo-yo", "$1.00", true, ["Toys"]).unwrap();
        assert_eq!(product.id(), "Yo-yo");
    }

    #[test]
    fn decode_reads_wire_shape() {
        let body = br#"[
            {"tags": ["Sporting Goods"], "price": "$49.99", "stocked": true, "name": "Football"},
            {"tags": ["Electronics", "Sporting Goods"], "price": "$26.99", "stocked": false, "name": "Ultrak 100 lap timer"}
        ]"#;

        let products = decode_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name(), "Football");
        assert_eq!(products[0].price(), "$49.99");
        assert!(products[0].stocked());
        assert!(!products[1].stocked());
        assert!(products[1].has_tag("Electronics"));
        assert!(products[1].has_tag("Sporting Goods"));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_products(b"<html>oops</html>").unwrap_err();
        match err {
            CatalogError::Decode(_) => {}
            _ => panic!("Expected Decode error for non-JSON body"),
        }
    }

    #[test]
    fn decode_rejects_record_without_tags() {
        let body = br#"[{"tags": [], "price": "$1", "stocked": true, "name": "Loose"}]"#;
        let err = decode_products(body).unwrap_err();
        match err {
            CatalogError::Decode(msg) => assert!(msg.contains("at least one tag")),
            _ => panic!("Expected Decode error for tagless record"),
        }
    }

    #[test]
    fn decode_rejects_duplicate_names() {
        let body = br#"[
            {"tags": ["A"], "price": "$1", "stocked": true, "name": "Twin"},
            {"tags": ["B"], "price": "$2", "stocked": false, "name": "Twin"}
        ]"#;
        let err = decode_products(body).unwrap_err();
        assert_eq!(err, CatalogError::duplicate("Twin"));
    }
}
