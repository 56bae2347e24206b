//! Benchmark: page production and full list traversal.
//!
//! Run with: `cargo bench -p scrollwin-core --bench traversal_bench`
//!
//! Page production dominates an edge event, since revisited pages are
//! regenerated rather than stored.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scrollwin_core::{InfiniteScrollList, ListConfig, NullSurface, SeedPolicy, SequenceSource};

fn bench_produce(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_produce");
    let source = SequenceSource::new(0.5);
    for len in [100usize, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| black_box(source.produce(black_box(7), len)));
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_traversal");
    for total in [10_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            let config = ListConfig::default().with_seed(SeedPolicy::Fixed(0.5));
            b.iter(|| {
                let mut list =
                    InfiniteScrollList::new(config.clone(), NullSurface).expect("valid config");
                list.set_items_total(total).expect("total accepted");
                while list.on_bottom_reached() {}
                while list.on_top_reached() {}
                black_box(list.window().offset())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_produce, bench_traversal);
criterion_main!(benches);
