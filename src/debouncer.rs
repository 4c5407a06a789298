use std::{sync::atomic, time::Duration};

use crate::{
    clock::{Clock, SystemClock},
    config::DebounceConfig,
};

/// Reference time of a debouncer that has never accepted a click.
pub const NEVER_CLICKED: i64 = 0;

/// Suppresses clicks that land inside the window following the last
/// accepted click.
///
/// The last accepted time lives in an atomic and is only moved by
/// [`ClickDebouncer::check_and_record`], so one instance can be shared
/// across threads behind an `Arc`.
#[derive(Debug)]
pub struct ClickDebouncer<C: Clock> {
    last_accepted: atomic::AtomicI64,
    window_ms: i64,
    clock: C,
}

impl ClickDebouncer<SystemClock> {
    pub fn with_system_clock(window: Duration) -> Self {
        Self::new(window, SystemClock)
    }
}

impl<C: Clock> ClickDebouncer<C> {
    pub fn new(window: Duration, clock: C) -> Self {
        Self {
            last_accepted: atomic::AtomicI64::new(NEVER_CLICKED),
            window_ms: i64::try_from(window.as_millis()).unwrap_or(i64::MAX),
            clock,
        }
    }

    pub fn from_config(config: &DebounceConfig, clock: C) -> Self {
        Self::new(config.window(), clock)
    }

    /// Returns `true` when this call is a fast repeat of the last accepted
    /// click. Otherwise records now as the new reference and returns `false`.
    ///
    /// A non-positive delta (clock stepped back, or the same millisecond as
    /// the last accepted click) counts as a new click.
    pub fn check_and_record(&self) -> bool {
        let mut now = NEVER_CLICKED;
        // The clock is read inside the update so a retry after a lost race
        // sees a time no earlier than the winner's.
        let result = self.last_accepted.fetch_update(
            atomic::Ordering::SeqCst,
            atomic::Ordering::SeqCst,
            |last| {
                now = self.clock.now_millis();
                let delta = now.saturating_sub(last);
                if 0 < delta && delta < self.window_ms {
                    None
                } else {
                    Some(now)
                }
            },
        );

        match result {
            Ok(previous) => {
                if now <= previous && previous != NEVER_CLICKED {
                    ::log::debug!(
                        "Click at {} accepted with non-positive delta from {}",
                        now,
                        previous
                    );
                }
                ::log::trace!("Click accepted at {}", now);
                false
            }
            Err(last) => {
                ::log::trace!(
                    "Fast click suppressed at {} ({} ms after {})",
                    now,
                    now - last,
                    last
                );
                true
            }
        }
    }

    pub fn last_accepted_millis(&self) -> i64 {
        self.last_accepted.load(atomic::Ordering::SeqCst)
    }

    /// Forgets the last accepted click.
    pub fn reset(&self) {
        self.last_accepted.store(NEVER_CLICKED, atomic::Ordering::SeqCst);
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms as u64)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
