use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use std::sync::Arc;

use gearbook_registry::{InMemoryRegistry, ReservationStore};
use gearbook_specs::{SpecProvider, TechSpecs};

struct NoSpecs;

impl SpecProvider for NoSpecs {
    fn fetch_tech_specs(&self, _device_name: &str) -> TechSpecs {
        TechSpecs::new()
    }
}

fn bench_reserve_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("reserve_release");
    group.throughput(Throughput::Elements(1));

    group.bench_function("cycle", |b| {
        let registry = InMemoryRegistry::new(Arc::new(NoSpecs));
        b.iter(|| {
            let id = registry
                .reserve(black_box("Samsung Galaxy S9"), black_box(1), "bench")
                .unwrap();
            registry.release(id).unwrap();
        });
    });

    group.finish();
}

fn bench_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshots");

    group.bench_function("list_devices", |b| {
        let registry = InMemoryRegistry::new(Arc::new(NoSpecs));
        b.iter(|| black_box(registry.list_devices()));
    });

    group.bench_function("list_bookings_100", |b| {
        let registry = InMemoryRegistry::new(Arc::new(NoSpecs));
        for i in 0..100 {
            registry
                .reserve("Samsung Galaxy S9", 1, &format!("bench-{i}"))
                .unwrap();
        }
        b.iter(|| black_box(registry.list_bookings()));
    });

    group.finish();
}

criterion_group!(benches, bench_reserve_release, bench_snapshots);
criterion_main!(benches);
