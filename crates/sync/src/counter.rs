//! Shared-lock protected counter.

use parking_lot::RwLock;

/// A thread-safe counter for many-readers, few-writers workloads.
///
/// Reads take the shared lock and can proceed in parallel; increments
/// and resets take the exclusive lock. Readers never observe a torn
/// value, and between resets the value they observe is monotonically
/// non-decreasing.
#[derive(Debug, Default)]
pub struct RwCounter {
    value: RwLock<u64>,
}

impl RwCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter with an explicit starting value.
    pub fn with_value(initial: u64) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    /// Read the current value. Shared lock; readers run in parallel.
    pub fn get(&self) -> u64 {
        *self.value.read()
    }

    /// Increment and return the new value. Exclusive lock.
    pub fn increment(&self) -> u64 {
        let mut value = self.value.write();
        *value += 1;
        *value
    }

    /// Reset to zero. Exclusive lock.
    pub fn reset(&self) {
        *self.value.write() = 0;
    }
}
