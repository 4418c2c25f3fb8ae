//! Benchmarks for window computation and item emission.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vlist::layout::window;
use vlist::types::{ItemPlacement, ListOptions};
use vlist::ListView;

/// Benchmark the bare window computation at a mid-list offset.
fn bench_window(c: &mut Criterion) {
    let options = ListOptions::new(100_000, 35.0, 600.0);

    c.bench_function("window_mid_scroll", |b| {
        b.iter(|| window(black_box(&options), black_box(1_750_000.0)).expect("valid options"))
    });
}

/// Window computation must not scale with item count.
fn bench_window_by_item_count(c: &mut Criterion) {
    let counts = [1_000usize, 100_000, 10_000_000];

    let mut group = c.benchmark_group("window_item_count");

    for count in counts {
        let options = ListOptions::new(count, 35.0, 600.0);
        let offset = (count as f32) * 35.0 / 2.0;

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("window", count), &options, |b, options| {
            b.iter(|| window(black_box(options), black_box(offset)).expect("valid options"))
        });
    }

    group.finish();
}

/// Benchmark a full scroll tick through the engine: notification,
/// recomputation, and emission of every windowed item.
fn bench_scroll_tick(c: &mut Criterion) {
    let data: Vec<String> = (0..100_000).map(|i| format!("Row {}", i)).collect();
    let options = ListOptions::new(100_000, 35.0, 600.0);
    let view = ListView::new(
        options,
        Box::new(|p: ItemPlacement, d: Option<&String>| (p.index, p.top, d.cloned())),
    )
    .expect("valid options");
    let mut view = view.with_data(data);

    let mut offset = 0.0f32;
    c.bench_function("scroll_tick", |b| {
        b.iter(|| {
            offset = (offset + 35.0) % 3_500_000.0;
            view.handle_scroll(black_box(offset)).expect("valid options")
        })
    });
}

criterion_group!(
    benches,
    bench_window,
    bench_window_by_item_count,
    bench_scroll_tick,
);

criterion_main!(benches);
