//! Benchmarks for deep clone, structural compare and JSON output on a
//! nested document.

use criterion::{criterion_group, criterion_main, Criterion};
use jsonv_core::{array_from, object, object_from, Value};
use std::hint::black_box;

fn build_document(records: usize) -> Value {
    let mut doc = object();
    let items: Vec<Value> = (0..records)
        .map(|i| {
            object_from([
                ("id", Value::from(i as i64)),
                ("name", Value::from(format!("record-{i}"))),
                ("score", Value::from(i as f64 / 3.0)),
                ("tags", array_from(["alpha", "beta", "gamma"])),
                ("active", Value::from(i % 2 == 0)),
            ])
        })
        .collect();
    doc.insert("items", items).ok();
    doc.insert("count", records as i64).ok();
    doc
}

fn bench_clone(c: &mut Criterion) {
    let doc = build_document(500);
    c.bench_function("clone_500_records", |b| b.iter(|| black_box(doc.clone())));
    c.bench_function("try_clone_500_records", |b| b.iter(|| black_box(doc.try_clone())));
}

fn bench_compare(c: &mut Criterion) {
    let a = build_document(500);
    let b = build_document(500);
    c.bench_function("compare_500_records", |bench| {
        bench.iter(|| black_box(a.compare(black_box(&b))))
    });
    c.bench_function("eq_500_records", |bench| bench.iter(|| black_box(a == *black_box(&b))));
}

fn bench_write(c: &mut Criterion) {
    let doc = build_document(500);
    c.bench_function("to_string_500_records", |b| b.iter(|| black_box(doc.to_string())));
}

criterion_group!(benches, bench_clone, bench_compare, bench_write);
criterion_main!(benches);
