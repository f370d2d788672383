use std::sync::atomic::{AtomicU64, Ordering};

/// Orders overlapping requests of one kind.
///
/// Each request takes a ticket before its first suspension point. When it
/// completes, its result may be applied only if no later ticket was issued.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
