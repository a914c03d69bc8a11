use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_atomics::{AtomicBool, AtomicUsize, LoadOrder, MemoryOrder, StoreOrder};

fn bench_word_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("word cell");
    let a = AtomicUsize::new(0);

    group.bench_function("load/relaxed", |b| {
        b.iter(|| black_box(a.load(LoadOrder::Relaxed)))
    });
    group.bench_function("load/seq_cst", |b| {
        b.iter(|| black_box(a.load(LoadOrder::SeqCst)))
    });
    group.bench_function("store/release", |b| {
        b.iter(|| a.store(black_box(1), StoreOrder::Release))
    });
    group.bench_function("swap/acq_rel", |b| {
        b.iter(|| black_box(a.swap(black_box(2), MemoryOrder::AcqRel)))
    });
    group.bench_function("fetch_add/relaxed", |b| {
        b.iter(|| black_box(a.fetch_add(1, MemoryOrder::Relaxed)))
    });
    group.bench_function("fetch_add/seq_cst", |b| {
        b.iter(|| black_box(a.fetch_add(1, MemoryOrder::SeqCst)))
    });
    group.bench_function("cas_strong/uncontended", |b| {
        b.iter(|| {
            let mut expected = a.load(LoadOrder::Relaxed);
            while !a.compare_and_swap_strong(
                &mut expected,
                expected.wrapping_add(1),
                MemoryOrder::AcqRel,
                LoadOrder::Acquire,
            ) {}
        })
    });
    group.finish();
}

fn bench_flag_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("boolean cell");
    let flag = AtomicBool::new(false);

    group.bench_function("fetch_xor/acq_rel", |b| {
        b.iter(|| black_box(flag.fetch_xor(true, MemoryOrder::AcqRel)))
    });
    group.bench_function("swap/seq_cst", |b| {
        b.iter(|| black_box(flag.swap(black_box(true), MemoryOrder::SeqCst)))
    });
    group.finish();
}

criterion_group!(benches, bench_word_cell, bench_flag_cell);
criterion_main!(benches);
