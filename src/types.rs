//! Shared identifier types for the instance construction protocol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a factory.
///
/// Allocated once when a `Factory` is created and stamped onto every instance
/// it constructs, so an instance can be checked for membership against its
/// originating factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FactoryId(u64);

impl FactoryId {
    /// Allocate the next process-unique id.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        FactoryId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric form, for diagnostics and logging.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "factory-{}", self.0)
    }
}
