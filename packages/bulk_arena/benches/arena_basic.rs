//! Basic benchmarks for the `bulk_arena` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use bulk_arena::BulkArena;
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

const BLOCK_SIZE: usize = 64;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("arena_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(BulkArena::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("alloc_one");
    group.bench_function("alloc_one", |b| {
        b.iter_custom(|iters| {
            let mut arenas = iter::repeat_with(BulkArena::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for arena in &mut arenas {
                _ = black_box(arena.alloc(black_box(BLOCK_SIZE)));
            }

            let elapsed = start.elapsed();

            for arena in &mut arenas {
                arena.free_all();
            }

            elapsed
        });
    });

    let allocs_op = allocs.operation("alloc_100_free_all");
    group.bench_function("alloc_100_free_all", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut arena = BulkArena::new();

                for _ in 0..100 {
                    _ = black_box(arena.alloc(BLOCK_SIZE));
                }

                arena.free_all();
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
