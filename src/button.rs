use serde::{Deserialize, Serialize};
use std::sync::atomic;

use crate::{clock::Clock, debouncer::ClickDebouncer};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Accepted,
    Suppressed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickStats {
    pub accepted: u64,
    pub suppressed: u64,
}

/// Click handler that runs its callback only for accepted clicks.
pub struct DebouncedButton<C: Clock> {
    debouncer: ClickDebouncer<C>,
    callback: Box<dyn Fn() + Send + Sync>,
    accepted: atomic::AtomicU64,
    suppressed: atomic::AtomicU64,
}

impl<C: Clock> DebouncedButton<C> {
    pub fn new(debouncer: ClickDebouncer<C>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            debouncer,
            callback: Box::new(callback),
            accepted: atomic::AtomicU64::new(0),
            suppressed: atomic::AtomicU64::new(0),
        }
    }

    pub fn click(&self) -> ClickOutcome {
        if self.debouncer.check_and_record() {
            self.suppressed.fetch_add(1, atomic::Ordering::SeqCst);
            ::log::debug!("Click suppressed");
            return ClickOutcome::Suppressed;
        }

        self.accepted.fetch_add(1, atomic::Ordering::SeqCst);
        ::log::info!("Click detected");
        (self.callback)();
        ClickOutcome::Accepted
    }

    pub fn stats(&self) -> ClickStats {
        ClickStats {
            accepted: self.accepted.load(atomic::Ordering::SeqCst),
            suppressed: self.suppressed.load(atomic::Ordering::SeqCst),
        }
    }

    pub fn debouncer(&self) -> &ClickDebouncer<C> {
        &self.debouncer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::{
        sync::{atomic::AtomicU32, Arc},
        time::Duration,
    };

    fn counting_button(
        clock: Arc<ManualClock>,
    ) -> (Arc<AtomicU32>, DebouncedButton<Arc<ManualClock>>) {
        let presses = Arc::new(AtomicU32::new(0));
        let button = DebouncedButton::new(
            ClickDebouncer::new(Duration::from_millis(300), clock),
            {
                let presses = presses.clone();
                move || {
                    presses.fetch_add(1, atomic::Ordering::SeqCst);
                }
            },
        );
        (presses, button)
    }

    #[test]
    fn callback_runs_only_for_accepted_clicks() {
        let clock = Arc::new(ManualClock::new(10_000));
        let (presses, button) = counting_button(clock.clone());

        assert_eq!(button.click(), ClickOutcome::Accepted);
        clock.advance(100);
        assert_eq!(button.click(), ClickOutcome::Suppressed);
        clock.advance(100);
        assert_eq!(button.click(), ClickOutcome::Suppressed);
        clock.advance(100);
        assert_eq!(button.click(), ClickOutcome::Accepted);

        assert_eq!(presses.load(atomic::Ordering::SeqCst), 2);
        assert_eq!(
            button.stats(),
            ClickStats {
                accepted: 2,
                suppressed: 2,
            }
        );
        assert_eq!(button.debouncer().last_accepted_millis(), 10_300);
    }

    #[test]
    fn stats_serialize_as_json() {
        let clock = Arc::new(ManualClock::new(10_000));
        let (_presses, button) = counting_button(clock);
        button.click();
        button.click();

        let json = serde_json::to_string(&button.stats()).unwrap();
        assert_eq!(json, r#"{"accepted":2,"suppressed":0}"#);
        assert_eq!(
            serde_json::to_string(&ClickOutcome::Suppressed).unwrap(),
            r#""Suppressed""#
        );
    }
}
