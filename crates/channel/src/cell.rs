//! The shared cell behind a channel.
//!
//! Invariants:
//! - The cell leaves `Empty` exactly once; every later attempt fails.
//! - The slot mutex is held only for transitions and condition checks,
//!   never across user code.
//! - The condvar is notified exactly once, on the transition out of
//!   `Empty`, and wakes every waiter.

use handoff_core::{FutureStatus, HandoffError};
use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Fulfillment state of a cell.
///
/// `Taken` is retrieval bookkeeping, not a fulfillment transition: it
/// records that a single-consumer `get` already moved the result out.
pub(crate) enum Slot<T, E> {
    /// No outcome stored yet.
    Empty,
    /// The producer stored a value.
    Ready(T),
    /// The producer stored an error.
    Failed(E),
    /// The producer was dropped before storing anything.
    Broken,
    /// A single-consumer `get` already moved the result out.
    Taken,
}

impl<T, E> Slot<T, E> {
    /// Readiness of this slot, or `None` while still empty.
    fn status(&self) -> Option<FutureStatus> {
        match self {
            Slot::Empty => None,
            Slot::Ready(_) | Slot::Taken => Some(FutureStatus::Ready),
            Slot::Failed(_) | Slot::Broken => Some(FutureStatus::Failed),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Slot::Empty => "empty",
            Slot::Ready(_) => "ready",
            Slot::Failed(_) => "failed",
            Slot::Broken => "broken",
            Slot::Taken => "taken",
        }
    }
}

/// Single-slot synchronized storage shared by one producer and its
/// consumers. Jointly owned through `Arc`; freed when the last handle
/// drops.
pub(crate) struct Cell<T, E> {
    slot: Mutex<Slot<T, E>>,
    ready: Condvar,
}

impl<T, E> Cell<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Empty),
            ready: Condvar::new(),
        }
    }

    /// Store a terminal outcome and wake every waiter.
    ///
    /// Fails with `AlreadySatisfied` if the cell already left `Empty`,
    /// whichever thread got there first.
    pub(crate) fn satisfy(&self, outcome: Slot<T, E>) -> Result<(), HandoffError<E>> {
        let mut slot = self.slot.lock();
        if !matches!(*slot, Slot::Empty) {
            return Err(HandoffError::AlreadySatisfied);
        }
        tracing::trace!(outcome = outcome.kind(), "cell satisfied");
        *slot = outcome;
        drop(slot);
        self.ready.notify_all();
        Ok(())
    }

    /// Transition to `Broken` if still empty. Called when the producer
    /// handle is dropped, so waiters are not left blocked forever.
    pub(crate) fn break_if_empty(&self) {
        let mut slot = self.slot.lock();
        if matches!(*slot, Slot::Empty) {
            tracing::debug!("promise dropped before fulfillment; channel broken");
            *slot = Slot::Broken;
            drop(slot);
            self.ready.notify_all();
        }
    }

    /// Block the calling thread until the cell leaves `Empty`.
    pub(crate) fn wait_ready(&self) {
        let mut slot = self.slot.lock();
        while matches!(*slot, Slot::Empty) {
            self.ready.wait(&mut slot);
        }
    }

    /// Block until settled or until `timeout` elapses. Never consumes.
    pub(crate) fn wait_for(&self, timeout: Duration) -> FutureStatus {
        let deadline = Instant::now() + timeout;
        let mut slot = self.slot.lock();
        loop {
            if let Some(status) = slot.status() {
                return status;
            }
            if self.ready.wait_until(&mut slot, deadline).timed_out() {
                return slot.status().unwrap_or(FutureStatus::TimedOut);
            }
        }
    }

    /// Non-blocking probe: true once the cell has settled.
    pub(crate) fn is_settled(&self) -> bool {
        self.slot.lock().status().is_some()
    }

    /// Block until settled, then move the outcome out.
    ///
    /// The first call consumes the result; later calls observe `Taken`
    /// and fail with `AlreadyRetrieved`. A broken cell stays broken so
    /// repeated retrieval keeps reporting the producer's disappearance.
    pub(crate) fn take(&self) -> Result<T, HandoffError<E>> {
        let mut slot = self.slot.lock();
        while matches!(*slot, Slot::Empty) {
            self.ready.wait(&mut slot);
        }
        match std::mem::replace(&mut *slot, Slot::Taken) {
            Slot::Ready(value) => Ok(value),
            Slot::Failed(error) => Err(HandoffError::Failed(error)),
            Slot::Broken => {
                *slot = Slot::Broken;
                Err(HandoffError::BrokenChannel)
            }
            Slot::Taken => Err(HandoffError::AlreadyRetrieved),
            Slot::Empty => unreachable!("wait loop guarantees a settled slot"),
        }
    }

    /// Block until settled, then return a copy of the outcome.
    ///
    /// Used by the shared handle: side-effect-free and callable
    /// repeatedly, every clone observes the same terminal state.
    pub(crate) fn get_cloned(&self) -> Result<T, HandoffError<E>>
    where
        T: Clone,
        E: Clone,
    {
        let mut slot = self.slot.lock();
        while matches!(*slot, Slot::Empty) {
            self.ready.wait(&mut slot);
        }
        match &*slot {
            Slot::Ready(value) => Ok(value.clone()),
            Slot::Failed(error) => Err(HandoffError::Failed(error.clone())),
            Slot::Broken => Err(HandoffError::BrokenChannel),
            Slot::Taken => Err(HandoffError::AlreadyRetrieved),
            Slot::Empty => unreachable!("wait loop guarantees a settled slot"),
        }
    }
}
