use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use shelf_catalog::{Catalog, FilterState, Product, group_by_tags};

fn synthetic_products(count: usize, tag_pool: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let tags = [format!("tag-{:03}", i % tag_pool), format!("tag-{:03}", (i * 7) % tag_pool)];
            Product::new(format!("product-{i}"), "$1.00", i % 3 != 0, tags)
                .expect("synthetic product is valid")
        })
        .collect()
}

fn bench_group_by_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_tags");
    for &count in &[100usize, 1_000, 5_000] {
        let products = synthetic_products(count, 40);
        group.bench_with_input(BenchmarkId::from_parameter(count), &products, |b, products| {
            b.iter(|| group_by_tags(Some(black_box(products))))
        });
    }
    group.finish();
}

fn bench_visible(c: &mut Criterion) {
    let catalog = Catalog::from_products(&synthetic_products(1_000, 40)).expect("unique names");
    let filter = FilterState::default()
        .with_text("product-1")
        .with_in_stock_only(true)
        .predicate();

    c.bench_function("visible_1000", |b| {
        b.iter(|| black_box(&catalog).visible(black_box(&filter)).len())
    });
}

criterion_group!(benches, bench_group_by_tags, bench_visible);
criterion_main!(benches);
