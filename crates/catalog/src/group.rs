//! Tag grouping.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use shelf_core::CatalogResult;

use crate::filter::ProductFilter;
use crate::product::{Product, ensure_unique_names};

/// All products carrying one tag, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    tag: String,
    products: Vec<Product>,
}

impl Group {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Tag-grouped catalog, tags ascending.
///
/// Derived from a product list; rebuild it rather than editing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    groups: Vec<Group>,
}

/// A group as seen through a filter: only the passing products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleGroup<'a> {
    pub tag: &'a str,
    pub products: Vec<&'a Product>,
}

/// Group a product list by tag.
///
/// `None` stands for "no data yet" and maps to `None`; an empty list maps to an
/// empty catalog. Tags are sorted ascending and every product appears once per
/// tag it carries, keeping its position relative to the input.
pub fn group_by_tags(products: Option<&[Product]>) -> Option<Catalog> {
    let products = products?;

    let tags: BTreeSet<&str> = products
        .iter()
        .flat_map(|product| product.tags().iter().map(String::as_str))
        .collect();

    let groups = tags
        .into_iter()
        .map(|tag| Group {
            tag: tag.to_owned(),
            products: products
                .iter()
                .filter(|product| product.has_tag(tag))
                .cloned()
                .collect(),
        })
        .collect();

    Some(Catalog { groups })
}

impl Catalog {
    /// Group `products`, first checking that names are unique.
    pub fn from_products(products: &[Product]) -> CatalogResult<Self> {
        ensure_unique_names(products)?;
        Ok(group_by_tags(Some(products)).unwrap_or_default())
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(Group::tag)
    }

    pub fn group(&self, tag: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.tag == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups with at least one product passing `filter`.
    ///
    /// Groups left with nothing are dropped rather than returned empty.
    pub fn visible<'a>(&'a self, filter: &ProductFilter) -> Vec<VisibleGroup<'a>> {
        self.groups
            .iter()
            .filter_map(|group| {
                let products: Vec<&Product> = group
                    .products
                    .iter()
                    .filter(|product| filter.matches(product))
                    .collect();
                (!products.is_empty()).then_some(VisibleGroup {
                    tag: &group.tag,
                    products,
                })
            })
            .collect()
    }
}
