//! Regression tests for multi-lock acquisition and shared-lock reads.

use handoff::prelude::*;
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use std::thread;
use std::time::Duration;

const STRESS_ITERS: usize = 2_000;

/// Two threads take the same two locks in opposite orders, many times.
/// Sequential acquisition would deadlock almost immediately; the ordered
/// multi-lock must keep making progress. A channel plays watchdog so a
/// regression fails the test instead of hanging it.
#[test]
fn opposite_order_lock_both_makes_progress() {
    let (done, finished) = handoff::channel::<(), String>();

    let runner = thread::spawn(move || {
        let a = Mutex::new(0u64);
        let b = Mutex::new(0u64);

        thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..STRESS_ITERS {
                    let (mut guard_a, mut guard_b) = lock_both(&a, &b);
                    *guard_a += 1;
                    *guard_b += 1;
                }
            });
            s.spawn(|| {
                for _ in 0..STRESS_ITERS {
                    let (mut guard_b, mut guard_a) = lock_both(&b, &a);
                    *guard_a += 1;
                    *guard_b += 1;
                }
            });
        });

        assert_eq!(*a.lock(), 2 * STRESS_ITERS as u64);
        assert_eq!(*b.lock(), 2 * STRESS_ITERS as u64);
        done.fulfill_void().unwrap();
    });

    match finished.wait_for(Duration::from_secs(30)) {
        FutureStatus::Ready => runner.join().unwrap(),
        status => panic!("lock stress did not finish in time: {:?}", status),
    }
}

/// Four threads grab three locks in a freshly shuffled order every
/// iteration. The address-ordered acquisition keeps this deadlock-free
/// and every increment lands.
#[test]
fn shuffled_lock_all_makes_progress() {
    let (done, finished) = handoff::channel::<(), String>();

    let runner = thread::spawn(move || {
        let locks = [Mutex::new(0u64), Mutex::new(0u64), Mutex::new(0u64)];
        let threads = 4;
        let iters = 500;

        thread::scope(|s| {
            for _ in 0..threads {
                s.spawn(|| {
                    let mut rng = rand::thread_rng();
                    let mut order: Vec<usize> = (0..locks.len()).collect();
                    for _ in 0..iters {
                        order.shuffle(&mut rng);
                        let picked: Vec<&Mutex<u64>> =
                            order.iter().map(|&i| &locks[i]).collect();
                        let mut guards = lock_all(&picked);
                        for guard in guards.iter_mut() {
                            **guard += 1;
                        }
                    }
                });
            }
        });

        for lock in &locks {
            assert_eq!(*lock.lock(), (threads * iters) as u64);
        }
        done.fulfill_void().unwrap();
    });

    match finished.wait_for(Duration::from_secs(30)) {
        FutureStatus::Ready => runner.join().unwrap(),
        status => panic!("lock_all stress did not finish in time: {:?}", status),
    }
}

#[test]
fn readers_observe_monotonic_counter_values() {
    let counter = RwCounter::new();
    let writers = 2;
    let increments = 500;

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut last = 0;
                for _ in 0..2_000 {
                    let value = counter.get();
                    assert!(
                        value >= last,
                        "counter went backwards: {} after {}",
                        value,
                        last
                    );
                    last = value;
                }
            });
        }
        for _ in 0..writers {
            s.spawn(|| {
                for _ in 0..increments {
                    counter.increment();
                }
            });
        }
    });

    assert_eq!(counter.get(), (writers * increments) as u64);
}
