use std::io::{self, BufRead};

use anyhow::Context;
use click_debounce::{ClickDebouncer, ClickOutcome, DebounceConfig, DebouncedButton, MonotonicClock};

fn main() -> anyhow::Result<()> {
    sensible_env_logger::init!();

    let config = match std::env::args().nth(1) {
        Some(path) => DebounceConfig::from_json_file(path)?,
        None => DebounceConfig::default(),
    };

    ::log::info!(
        "Listening for clicks on stdin, suppression window {:?}",
        config.window()
    );

    let button = DebouncedButton::new(
        ClickDebouncer::from_config(&config, MonotonicClock::new()),
        || ::log::info!("Button pressed"),
    );

    // one line per click
    for line in io::stdin().lock().lines() {
        line.context("Failed to read click from stdin")?;
        if button.click() == ClickOutcome::Suppressed {
            ::log::warn!("Fast double click ignored");
        }
    }

    let stats = serde_json::to_string(&button.stats()).context("Failed to encode click stats")?;
    println!("{}", stats);

    Ok(())
}
