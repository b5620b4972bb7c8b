use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::random_point_writes;
use bench::random_ranges;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use range_index::{Max, RangeIndex, Sum};
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_build(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("range_index/build");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);

        group.bench_function(BenchmarkId::new("max", size), |bencher| {
            bencher.iter(|| {
                let index = RangeIndex::<Max>::from_values(black_box(&values)).unwrap();
                black_box(index.query_all().unwrap());
            })
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("range_index/query");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let queries = random_ranges(&mut rng, size, 4 * size);

        let max = RangeIndex::<Max>::from_values(&values).unwrap();
        group.bench_function(BenchmarkId::new("max", size), |bencher| {
            bencher.iter(|| {
                let mut acc = 0_i64;
                for &(l, r) in &queries {
                    acc ^= max.query(black_box(l), black_box(r)).unwrap();
                }
                black_box(acc);
            })
        });

        let sum = RangeIndex::<Sum>::from_values(&values).unwrap();
        group.bench_function(BenchmarkId::new("sum", size), |bencher| {
            bencher.iter(|| {
                let mut acc = 0_i64;
                for &(l, r) in &queries {
                    acc ^= sum.query(black_box(l), black_box(r)).unwrap();
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("range_index/mixed");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let queries = random_ranges(&mut rng, size, size);
        let writes = random_point_writes(&mut rng, size, size, VALUE_RANGE);

        group.bench_function(BenchmarkId::new("max", size), |bencher| {
            bencher.iter(|| {
                let mut index = RangeIndex::<Max>::from_values(black_box(&values)).unwrap();
                let mut acc = 0_i64;
                for (&(l, r), &(i, x)) in queries.iter().zip(&writes) {
                    index.update(i, x).unwrap();
                    acc ^= index.query(black_box(l), black_box(r)).unwrap();
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_mixed);
criterion_main!(benches);
