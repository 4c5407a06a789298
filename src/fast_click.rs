use std::sync::OnceLock;

use crate::{clock::SystemClock, config::DebounceConfig, debouncer::ClickDebouncer};

static SHARED: OnceLock<ClickDebouncer<SystemClock>> = OnceLock::new();

/// Process-wide debouncer on the wall clock with the default window.
///
/// Every caller shares one reference time, so a click on one widget
/// suppresses a quick click on any other.
pub fn shared() -> &'static ClickDebouncer<SystemClock> {
    SHARED.get_or_init(|| ClickDebouncer::from_config(&DebounceConfig::default(), SystemClock))
}

/// `true` if this click came too soon after the last accepted one.
pub fn is_fast_double_click() -> bool {
    shared().check_and_record()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // The only test touching the shared instance, so no cross-test races.
    // Whether an immediate repeat is suppressed depends on the wall clock
    // ticking between calls, so only the first click is asserted here.
    #[test]
    fn shared_instance_records_first_click() {
        assert!(std::ptr::eq(shared(), shared()));
        assert_eq!(shared().window(), Duration::from_millis(300));
        shared().reset();

        assert!(!is_fast_double_click());
        assert!(shared().last_accepted_millis() > 1_577_836_800_000);
    }
}
