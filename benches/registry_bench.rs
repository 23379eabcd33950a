//! Benchmarks for the Medboard registry
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use medboard::model::{Availability, Doctor};
use medboard::registry::Collection;
use tokio::runtime::Runtime;

fn doctor(i: usize) -> Doctor {
    Doctor {
        id: 0,
        name: format!("Doctor {}", i),
        specialty: match i % 4 {
            0 => "Cardiology".to_string(),
            1 => "Orthopedics".to_string(),
            2 => "Pediatrics".to_string(),
            _ => "General Medicine".to_string(),
        },
        consultation_time: "09:00 - 13:00".to_string(),
        availability: Availability::Available,
        phone: format!("555-{:04}", i),
    }
}

fn seeded_collection(rt: &Runtime, count: usize) -> Collection<Doctor> {
    let collection = Collection::new();
    rt.block_on(async {
        for i in 0..count {
            collection.insert(doctor(i)).await.unwrap();
        }
    });
    collection
}

fn bench_insert(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("insert");

    for size in [100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("insert_{}", size), |b| {
            b.iter(|| {
                let collection = Collection::new();
                rt.block_on(async {
                    for i in 0..size {
                        collection.insert(black_box(doctor(i))).await.unwrap();
                    }
                });
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 10000] {
        let collection = seeded_collection(&rt, size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("search_{}", size), |b| {
            b.iter(|| {
                rt.block_on(async { collection.search(black_box("cardio")).await })
            })
        });
    }

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let collection = seeded_collection(&rt, 1000);

    c.bench_function("list_1000", |b| {
        b.iter(|| rt.block_on(async { black_box(collection.list().await) }))
    });
}

criterion_group!(benches, bench_insert, bench_search, bench_list);
criterion_main!(benches);
