// src/presentation/http/metrics.rs
use std::sync::atomic::{AtomicU64, Ordering};

/// Count of requests served by the static file handler.
#[derive(Debug, Default)]
pub struct HitCounter(AtomicU64);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count after this hit.
    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn load(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
