use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use std::hint::black_box;

use storem::{Data, MemoryBackend, Store, Value};

fn store_set_benchmark(c: &mut Criterion) {
    let mut store = Store::new();

    c.bench_function("store_set", |b| {
        let mut i = 0;
        b.iter(|| {
            store.set([("counter", black_box(i))]).unwrap();
            i += 1;
        });
    });
}

fn store_get_benchmark(c: &mut Criterion) {
    let mut store = Store::new();
    store.set([("counter", 42)]).unwrap();

    c.bench_function("store_get", |b| {
        b.iter(|| {
            black_box(store.get("counter"));
        });
    });
}

fn store_listen_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_listen");

    for effect_count in [1, 10, 100].iter() {
        let mut store = Store::new();

        for _ in 0..*effect_count {
            store.listen("value", |_: Option<&Value>, _: Option<&Value>| {
                // Empty effect
            });
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(effect_count),
            effect_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.set([("value", black_box(i))]).unwrap();
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

fn store_mutation_benchmark(c: &mut Criterion) {
    let mut store = Store::new();
    store.set((0..100).map(|i| (i, json!(i)))).unwrap();
    store.set_mutation("increment", |data: &mut Data, _: &[Value]| {
        for value in data.values_mut() {
            if let Some(n) = value.as_i64() {
                *value = json!(n + 1);
            }
        }
    });

    c.bench_function("store_mutation", |b| {
        b.iter(|| {
            store.run_mutation(black_box("increment"), &[]).unwrap();
        });
    });
}

fn store_persist_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_persist");

    for entry_count in [10, 100, 1000].iter() {
        let mut store = Store::builder()
            .persist(true)
            .backend(MemoryBackend::new())
            .build()
            .unwrap();
        store
            .set((0..*entry_count).map(|i| (i, json!({ "id": i, "name": "entry" }))))
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(entry_count),
            entry_count,
            |b, _| {
                let mut i = 0;
                b.iter(|| {
                    store.set([("cursor", black_box(i))]).unwrap();
                    i += 1;
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    store_set_benchmark,
    store_get_benchmark,
    store_listen_benchmark,
    store_mutation_benchmark,
    store_persist_benchmark,
);
criterion_main!(benches);
