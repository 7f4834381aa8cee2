//! Shared private-state cells for factory closures.
//!
//! A factory body allocates one fresh cell set per invocation and moves clones
//! into the procedure closures it returns. The cell itself never appears in
//! the constructed instance; only the closures that captured it can reach the
//! state, and it is reclaimed when the last of them drops.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A shared mutable cell for per-instance private state.
pub struct Private<T>(Arc<Mutex<T>>);

impl<T> Private<T> {
    /// Allocate a fresh cell holding `value`.
    pub fn new(value: T) -> Self {
        Private(Arc::new(Mutex::new(value)))
    }

    /// Run `f` with exclusive access to the state.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.0.lock())
    }

    /// Overwrite the state.
    pub fn set(&self, value: T) {
        *self.0.lock() = value;
    }

    /// Swap in a new value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.0.lock(), value)
    }
}

impl<T: Clone> Private<T> {
    /// Snapshot the current state.
    pub fn get(&self) -> T {
        self.0.lock().clone()
    }
}

impl<T> Clone for Private<T> {
    fn clone(&self) -> Self {
        Private(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Private<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Private").field(&*self.0.lock()).finish()
    }
}
