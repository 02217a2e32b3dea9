//! Benchmark for actions: CachedLazyGetter and ResettableGetter.
//!
//! Measures the cold path, the lock-free cached path, and contention.

use actionkit::action::{
    CachedLazyGetter, Getter, Setter, cached_lazy_getter, resettable_getter_with,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::{Arc, LazyLock};
use std::thread;

fn sum_to(limit: u64) -> u64 {
    let mut sum = 0;
    for index in 0..limit {
        sum += index;
    }
    sum
}

// =============================================================================
// CachedLazyGetter Benchmarks
// =============================================================================

/// Benchmark first access, which takes the initialization lock
fn benchmark_cached_lazy_getter_initial(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_lazy_getter_initial");

    for size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("computation_size", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let getter = cached_lazy_getter(move || sum_to(size));
                    let Ok(value) = getter.force();
                    black_box(*value)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark cached access against std's LazyLock
fn benchmark_cached_lazy_getter_vs_lazylock(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_lazy_getter_vs_lazylock");

    let getter = cached_lazy_getter(|| sum_to(1000));
    let _ = getter.force();

    group.bench_function("CachedLazyGetter::force", |bencher| {
        bencher.iter(|| {
            let Ok(value) = getter.force();
            black_box(*value)
        });
    });

    group.bench_function("Getter::get", |bencher| {
        bencher.iter(|| black_box(getter.get()));
    });

    let lazy_lock = LazyLock::new(|| sum_to(1000));
    let _ = *lazy_lock;

    group.bench_function("LazyLock", |bencher| {
        bencher.iter(|| black_box(*lazy_lock));
    });

    group.finish();
}

/// Benchmark a producer that fails before succeeding
fn benchmark_cached_lazy_getter_retry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_lazy_getter_retry");

    group.bench_function("fail_once_then_succeed", |bencher| {
        bencher.iter(|| {
            let attempts = std::sync::atomic::AtomicUsize::new(0);
            let getter = CachedLazyGetter::new(|| {
                if attempts.fetch_add(1, std::sync::atomic::Ordering::Relaxed) == 0 {
                    Err("retry")
                } else {
                    Ok(sum_to(100))
                }
            });
            let _ = black_box(getter.force());
            black_box(getter.force().copied())
        });
    });

    group.finish();
}

/// Benchmark initialization contention when multiple threads race on first access
fn benchmark_cached_lazy_getter_init_contention(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_lazy_getter_init_contention");

    for thread_count in [2, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("thread_count", thread_count),
            &thread_count,
            |bencher, &thread_count| {
                bencher.iter(|| {
                    let getter = Arc::new(cached_lazy_getter(|| sum_to(100)));

                    let handles: Vec<_> = (0..thread_count)
                        .map(|_| {
                            let getter = Arc::clone(&getter);
                            thread::spawn(move || getter.get())
                        })
                        .collect();

                    for handle in handles {
                        black_box(handle.join().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark cached access from multiple threads (should be lock-free)
fn benchmark_cached_lazy_getter_cached_access(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_lazy_getter_cached_access");

    for thread_count in [2, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("thread_count", thread_count),
            &thread_count,
            |bencher, &thread_count| {
                let getter = Arc::new(cached_lazy_getter(|| sum_to(1000)));
                // Pre-initialize
                let _ = getter.force();

                bencher.iter(|| {
                    let handles: Vec<_> = (0..thread_count)
                        .map(|_| {
                            let getter = Arc::clone(&getter);
                            thread::spawn(move || {
                                for _ in 0..1000 {
                                    black_box(getter.force().copied());
                                }
                            })
                        })
                        .collect();

                    for handle in handles {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// ResettableGetter Benchmarks
// =============================================================================

fn benchmark_resettable_getter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("resettable_getter");

    let slot = resettable_getter_with(42u64);

    group.bench_function("get", |bencher| {
        bencher.iter(|| black_box(slot.get()));
    });

    group.bench_function("set", |bencher| {
        bencher.iter(|| slot.set(black_box(7)));
    });

    group.bench_function("set_reset_cycle", |bencher| {
        bencher.iter(|| {
            slot.set(black_box(7));
            slot.reset();
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_cached_lazy_getter_initial,
    benchmark_cached_lazy_getter_vs_lazylock,
    benchmark_cached_lazy_getter_retry,
    benchmark_cached_lazy_getter_init_contention,
    benchmark_cached_lazy_getter_cached_access,
    benchmark_resettable_getter
);

criterion_main!(benches);
