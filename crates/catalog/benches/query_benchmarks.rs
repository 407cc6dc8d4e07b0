use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shopfront_catalog::{Catalog, Price, Product, ViewEvent, ViewState, apply};

const CATEGORIES: [&str; 4] = ["audio", "home", "outdoor", "office"];

/// Synthetic catalog with deterministic, interleaved prices and categories.
fn catalog(size: u64) -> Catalog {
    (0..size)
        .map(|i| {
            let price = Price::new(((i * 7919) % 5000) as f64 + 0.99).unwrap();
            Product::new(size - i, format!("Product {i}"), price, format!("https://e.com/{i}"))
                .with_description(format!("Sample description number {i} with speaker words"))
                .with_category(CATEGORIES[(i % 4) as usize])
        })
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for size in [10u64, 100, 1_000] {
        let catalog = catalog(size);
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("default_sort", size), &catalog, |b, catalog| {
            b.iter(|| apply(black_box(catalog.products()), "all", "default", ""));
        });

        group.bench_with_input(BenchmarkId::new("search_price_desc", size), &catalog, |b, catalog| {
            b.iter(|| apply(black_box(catalog.products()), "audio", "price-desc", "speaker"));
        });
    }

    group.finish();
}

fn bench_view_events(c: &mut Criterion) {
    let catalog = catalog(500);
    let events = vec![
        ViewEvent::SelectCategory("home".into()),
        ViewEvent::SelectSort("price-asc".into()),
        ViewEvent::Search("product 1".into()),
    ];

    c.bench_function("view_event_recompute", |b| {
        b.iter(|| {
            let mut state = ViewState::new();
            let mut shown = 0;
            for event in &events {
                state = state.reduce(event);
                shown += state.derive(black_box(&catalog)).len();
            }
            shown
        });
    });
}

criterion_group!(benches, bench_apply, bench_view_events);
criterion_main!(benches);
