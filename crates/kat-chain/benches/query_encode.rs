#![allow(missing_docs)]
//! Benchmark – `Query` percent-encoding assembly and `to_map` decoding.
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kat_chain::Query;

fn build_query(pairs: usize) -> Query {
    let mut query = Query::new();
    for i in 0..pairs {
        query.set(&format!("key {i}")).unwrap();
        query.add_str("value with spaces & symbols!").unwrap();
    }
    query
}

fn bench_query_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_encode");

    for &pairs in &[8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("assemble", pairs), &pairs, |b, &n| {
            b.iter(|| {
                let query = build_query(n);
                black_box(query.as_bytes().len());
            });
        });

        let assembled = build_query(pairs);
        group.bench_with_input(BenchmarkId::new("to_map", pairs), &pairs, |b, _| {
            b.iter(|| {
                let map = assembled.to_map();
                black_box(map.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_query_encode);
criterion_main!(benches);
