//! Built-in catalog used when no URL is configured.

use crate::product::Product;

const SAMPLE: &[(&str, &str, bool, &[&str])] = &[
    ("Football", "$49.99", true, &["Sporting Goods"]),
    ("Baseball", "$9.99", true, &["Sporting Goods"]),
    ("Basketball", "$29.99", false, &["Sporting Goods"]),
    ("iPod Touch", "$99.99", true, &["Electronics"]),
    ("iPhone 5", "$399.99", false, &["Electronics"]),
    ("Nexus 7", "$199.99", true, &["Electronics"]),
    ("Ultrak 100 lap timer", "$26.99", true, &["Electronics", "Sporting Goods"]),
];

/// The static product list, in display order.
///
/// Every row must pass [`Product::new`]; `every_sample_row_is_valid` checks it.
pub fn sample_products() -> Vec<Product> {
    SAMPLE
        .iter()
        .map(|&(name, price, stocked, tags)| Product::from_static(name, price, stocked, tags))
        .collect()
}
