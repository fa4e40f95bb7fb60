//! Deadlock-avoiding acquisition of multiple mutexes.
//!
//! Two threads that each take the same two locks one at a time, in
//! opposite orders, can end up waiting on each other forever. The
//! helpers here acquire every requested lock in one globally consistent
//! order (by cell address), so a circular wait cannot form no matter
//! what order callers name the locks in.

use parking_lot::{Mutex, MutexGuard};

fn addr<T>(mutex: &Mutex<T>) -> usize {
    mutex as *const Mutex<T> as usize
}

/// Acquire two mutexes without risking a circular wait.
///
/// The locks are taken in address order regardless of argument order;
/// guards come back in argument order. `lock_both(&a, &b)` on one thread
/// and `lock_both(&b, &a)` on another therefore never deadlock.
///
/// # Panics
///
/// Panics if both arguments are the same mutex, like re-locking a
/// non-reentrant mutex on the same thread would.
pub fn lock_both<'a, 'b, A, B>(
    a: &'a Mutex<A>,
    b: &'b Mutex<B>,
) -> (MutexGuard<'a, A>, MutexGuard<'b, B>) {
    assert_ne!(
        addr(a),
        addr(b),
        "lock_both called with the same mutex twice"
    );
    if addr(a) < addr(b) {
        let guard_a = a.lock();
        let guard_b = b.lock();
        (guard_a, guard_b)
    } else {
        let guard_b = b.lock();
        let guard_a = a.lock();
        (guard_a, guard_b)
    }
}

/// Acquire any number of mutexes without risking a circular wait.
///
/// The N-lock generalization of [`lock_both`]: locks are taken in
/// address order and the guards are returned in argument order.
///
/// # Panics
///
/// Panics if the same mutex appears more than once in `locks`.
pub fn lock_all<'a, T>(locks: &[&'a Mutex<T>]) -> Vec<MutexGuard<'a, T>> {
    let mut order: Vec<usize> = (0..locks.len()).collect();
    order.sort_by_key(|&i| addr(locks[i]));
    for pair in order.windows(2) {
        assert_ne!(
            addr(locks[pair[0]]),
            addr(locks[pair[1]]),
            "lock_all called with the same mutex more than once"
        );
    }

    let mut acquired: Vec<(usize, MutexGuard<'a, T>)> = order
        .into_iter()
        .map(|i| (i, locks[i].lock()))
        .collect();
    acquired.sort_by_key(|(i, _)| *i);
    acquired.into_iter().map(|(_, guard)| guard).collect()
}
