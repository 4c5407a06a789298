use std::{
    sync::{atomic, Arc},
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

// A fresh monotonic clock reads this far past the "never clicked" sentinel,
// so the first click is never mistaken for a repeat.
const MONOTONIC_ORIGIN_MS: i64 = 24 * 60 * 60 * 1000;

fn saturating_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Source of "now" in milliseconds since a fixed, clock-specific epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Wall clock, milliseconds since the Unix epoch.
///
/// Subject to clock adjustments; a step backwards lets the next click through.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => saturating_millis(since_epoch),
            Err(before_epoch) => -saturating_millis(before_epoch.duration()),
        }
    }
}

/// Monotonic clock backed by [`Instant`], counting from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> i64 {
        MONOTONIC_ORIGIN_MS.saturating_add(saturating_millis(self.origin.elapsed()))
    }
}

/// Hand-driven clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: atomic::AtomicI64,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: atomic::AtomicI64::new(start_millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.store(millis, atomic::Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, atomic::Ordering::SeqCst);
    }

    pub fn rewind(&self, millis: i64) {
        self.now.fetch_sub(millis, atomic::Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(atomic::Ordering::SeqCst)
    }
}
