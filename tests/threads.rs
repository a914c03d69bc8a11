use std::hint;
use std::thread;

use ordered_atomics::{
    thread_fence, AtomicBool, AtomicIsize, AtomicPtr, AtomicUsize, LoadOrder, MemoryOrder,
    StoreOrder,
};

const THREADS: usize = 4;
const PER_THREAD: usize = 1000;

#[test]
fn concurrent_fetch_add_totals() {
    let count = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    count.fetch_add(1, MemoryOrder::SeqCst);
                }
            });
        }
    });

    assert_eq!(count.load(LoadOrder::SeqCst), THREADS * PER_THREAD);
}

#[test]
fn fetch_add_returns_every_intermediate_value() {
    let count = AtomicUsize::new(0);
    let mut observed = Vec::with_capacity(THREADS * PER_THREAD);

    thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| count.fetch_add(1, MemoryOrder::SeqCst))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            observed.extend(handle.join().unwrap());
        }
    });

    observed.sort_unstable();
    let expected: Vec<usize> = (0..THREADS * PER_THREAD).collect();
    assert_eq!(observed, expected);
}

#[test]
fn swaps_linearize() {
    let cell = AtomicIsize::new(0);
    let mut observed = Vec::new();

    thread::scope(|s| {
        let cell = &cell;
        let handles: Vec<_> = (1..=8)
            .map(|v| s.spawn(move || cell.swap(v, MemoryOrder::AcqRel)))
            .collect();
        for handle in handles {
            observed.push(handle.join().unwrap());
        }
    });

    // every value swapped out exactly once; the final value is whichever
    // swap came last in the linearization
    observed.push(cell.load(LoadOrder::SeqCst));
    observed.sort_unstable();
    assert_eq!(observed, (0..=8).collect::<Vec<_>>());
}

#[test]
fn release_store_publishes_to_acquire_load() {
    let slot = AtomicPtr::<u64>::null();
    let ready = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            let p = Box::into_raw(Box::new(42u64));
            slot.store(p, StoreOrder::Release);
            ready.store(true, StoreOrder::Release);
        });
        s.spawn(|| {
            while !ready.load(LoadOrder::Acquire) {
                hint::spin_loop();
            }
            let p = slot.load(LoadOrder::Acquire);
            assert!(!p.is_null());
            assert_eq!(unsafe { *p }, 42);
        });
    });

    drop(unsafe { Box::from_raw(slot.into_inner()) });
}

#[test]
fn fences_order_relaxed_accesses() {
    for _ in 0..100 {
        let data = AtomicUsize::new(0);
        let flag = AtomicBool::new(false);

        thread::scope(|s| {
            s.spawn(|| {
                data.store(1, StoreOrder::Relaxed);
                thread_fence(MemoryOrder::Release);
                flag.store(true, StoreOrder::Relaxed);
            });
            s.spawn(|| {
                while !flag.load(LoadOrder::Relaxed) {
                    hint::spin_loop();
                }
                thread_fence(MemoryOrder::Acquire);
                assert_eq!(data.load(LoadOrder::Relaxed), 1);
            });
        });
    }
}

#[test]
fn weak_cas_spin_lock_excludes() {
    let lock = AtomicBool::new(false);
    let count = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    loop {
                        let mut expected = false;
                        if lock.compare_and_swap_weak(
                            &mut expected,
                            true,
                            MemoryOrder::Acquire,
                            LoadOrder::Relaxed,
                        ) {
                            break;
                        }
                        hint::spin_loop();
                    }
                    // a racy load/store pair, made safe by the lock
                    let v = count.load(LoadOrder::Relaxed);
                    count.store(v + 1, StoreOrder::Relaxed);
                    lock.store(false, StoreOrder::Release);
                }
            });
        }
    });

    assert_eq!(count.load(LoadOrder::SeqCst), THREADS * PER_THREAD);
}
