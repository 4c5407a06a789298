//! Suppression of fast repeated clicks.
//!
//! A [`ClickDebouncer`] accepts a click and then reports every further click
//! inside its suppression window as a fast repeat, until the window passes.

pub mod button;
pub mod clock;
pub mod config;
pub mod debouncer;
pub mod fast_click;

pub use button::{ClickOutcome, ClickStats, DebouncedButton};
pub use clock::{Clock, ManualClock, MonotonicClock, SystemClock};
pub use config::DebounceConfig;
pub use debouncer::ClickDebouncer;
pub use fast_click::is_fast_double_click;
