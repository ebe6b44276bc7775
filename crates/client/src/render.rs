//! Plain-text render of the catalog screen.

use std::fmt::Write;

use crate::state::CatalogState;

/// Render `state` the way the screen shows it.
///
/// A failure replaces everything with one `ERROR:` line. Before the first
/// successful load there is nothing to show. Otherwise: the control bar, then
/// every group with at least one product passing the filter.
pub fn render(state: &CatalogState) -> String {
    if let Some(err) = state.error() {
        return format!("ERROR: {}\n", err.message());
    }

    let Some(catalog) = state.catalog() else {
        return String::new();
    };

    let filter = state.filter();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Filter: {:?}  [{}] In stock only",
        filter.text,
        if filter.in_stock_only { 'x' } else { ' ' }
    );

    for group in catalog.visible(&filter.predicate()) {
        let _ = writeln!(out, "{}", group.tag);
        for product in group.products {
            let _ = writeln!(out, "  - {} {}", product.name(), product.price());
        }
    }
    out
}
