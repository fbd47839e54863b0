//! # Bloom Filter Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | add / contains | O(k) |
//! | number_of_items | O(m) |
//! | union / intersection | O(m) |

use bloom_filters::{BloomFilter, FilterConfig, SipHasher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn populated(config: &FilterConfig, prefix: &str, count: usize) -> BloomFilter {
    let mut filter = BloomFilter::from_config(config).unwrap();
    for i in 0..count {
        filter.add(format!("{}-{}", prefix, i).as_bytes());
    }
    filter
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let config = FilterConfig::for_expected_elements(10_000, 0.01).unwrap();
    let filter = populated(&config, "item", 10_000);

    group.bench_function("add_murmur3", |b| {
        let mut filter = BloomFilter::from_config(&config).unwrap();
        b.iter(|| filter.add(black_box(b"benchmark-item")))
    });

    group.bench_function("add_siphash", |b| {
        let mut filter = BloomFilter::with_hasher(
            config.capacity,
            config.hash_function_count,
            SipHasher::default(),
        )
        .unwrap();
        b.iter(|| filter.add(black_box(b"benchmark-item")))
    });

    group.bench_function("contains_hit", |b| {
        b.iter(|| black_box(filter.contains(black_box(b"item-42"))))
    });

    group.bench_function("contains_miss", |b| {
        b.iter(|| black_box(filter.contains(black_box(b"absent-item"))))
    });

    group.finish();
}

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimators");

    for n in [1_000usize, 10_000, 100_000] {
        let config = FilterConfig::for_expected_elements(n, 0.01).unwrap();
        let filter = populated(&config, "item", n);

        group.throughput(Throughput::Elements(config.capacity as u64));
        group.bench_with_input(BenchmarkId::new("number_of_items", n), &filter, |b, f| {
            b.iter(|| black_box(f.number_of_items()))
        });
        group.bench_with_input(BenchmarkId::new("gamma_deniability", n), &filter, |b, f| {
            b.iter(|| black_box(f.gamma_deniability()))
        });
    }

    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");
    let config = FilterConfig::for_expected_elements(10_000, 0.01).unwrap();
    let left = populated(&config, "left", 5_000);
    let right = populated(&config, "right", 5_000);

    group.bench_function("union", |b| b.iter(|| black_box(left.union(&right))));
    group.bench_function("intersection", |b| {
        b.iter(|| black_box(left.intersection(&right)))
    });
    group.bench_function("jaccard_index", |b| {
        b.iter(|| black_box(left.jaccard_index(&right)))
    });

    group.finish();
}

criterion_group!(benches, bench_membership, bench_estimators, bench_set_algebra);
criterion_main!(benches);
