//! Performance benchmarks for the watchdog.

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use vigil_test_helpers::ManualExecutor;
use vigil_watchdog::prelude::*;

/// A watchdog whose first window never expires during the benchmark.
fn idle_watchdog(executor: Arc<ManualExecutor>) -> Watchdog {
    Watchdog::with_timeout(Duration::from_secs(3600), executor).unwrap()
}

fn bench_responsiveness_probe(c: &mut Criterion) {
    let executor = Arc::new(ManualExecutor::new());
    let watchdog = idle_watchdog(executor);

    c.bench_function("is_unresponsive", |b| {
        b.iter(|| black_box(watchdog.is_unresponsive()));
    });
}

fn bench_stats_snapshot(c: &mut Criterion) {
    let executor = Arc::new(ManualExecutor::new());
    let watchdog = idle_watchdog(executor);

    c.bench_function("stats_snapshot", |b| {
        b.iter(|| black_box(watchdog.stats()));
    });
}

fn bench_post_and_service(c: &mut Criterion) {
    let executor = ManualExecutor::new();

    c.bench_function("post_and_service_probe", |b| {
        b.iter(|| {
            executor.post(Box::new(|| {}));
            executor.run_pending()
        });
    });
}

fn bench_spawn_and_teardown(c: &mut Criterion) {
    c.bench_function("spawn_and_teardown", |b| {
        b.iter(|| {
            let executor = Arc::new(ManualExecutor::new());
            let watchdog = idle_watchdog(executor);
            drop(watchdog);
        });
    });
}

criterion_group!(
    benches,
    bench_responsiveness_probe,
    bench_stats_snapshot,
    bench_post_and_service,
    bench_spawn_and_teardown,
);

criterion_main!(benches);
