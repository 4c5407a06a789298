use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

pub const DEFAULT_SUPPRESSION_WINDOW_MS: u64 = 300;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DebounceConfig {
    /// Clicks closer than this to the last accepted click are dropped.
    pub suppression_window_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            suppression_window_ms: DEFAULT_SUPPRESSION_WINDOW_MS,
        }
    }
}

impl DebounceConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse debounce config")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read debounce config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid debounce config {}", path.display()))?;
        ::log::info!(
            "Loaded debounce config from {}: {:?}",
            path.display(),
            config
        );
        Ok(config)
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.suppression_window_ms)
    }
}
