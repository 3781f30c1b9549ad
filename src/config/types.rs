//! Basic types for configuration

use crate::constants::watch;
use serde::Deserialize;
use std::time::Duration;

/// Polling budget of the file arrival watcher.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct WatchSettings {
    #[serde(default = "get_default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "get_default_interval_ms")]
    pub interval_ms: u64,
}

impl WatchSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self { max_attempts: get_default_max_attempts(), interval_ms: get_default_interval_ms() }
    }
}

fn get_default_max_attempts() -> u32 {
    watch::MAX_ATTEMPTS
}

fn get_default_interval_ms() -> u64 {
    watch::INTERVAL_MS
}
