use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::queue::UpdateCadence;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog JSON file to load instead of the embedded data set.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default)]
    pub updates: UpdateSettings,
}

/// Timing of the simulated update feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSettings {
    /// Milliseconds between update ticks (default: 2000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Milliseconds between a tick and its commit (default: 750).
    #[serde(default = "default_commit_delay_ms")]
    pub commit_delay_ms: u64,
    /// Whether the background pump runs at all (default: true). Manual
    /// tick/commit keys work either way.
    #[serde(default = "default_auto")]
    pub auto: bool,
}

fn default_interval_ms() -> u64 {
    2000
}

fn default_commit_delay_ms() -> u64 {
    750
}

fn default_auto() -> bool {
    true
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            commit_delay_ms: default_commit_delay_ms(),
            auto: default_auto(),
        }
    }
}

impl UpdateSettings {
    pub fn cadence(&self) -> UpdateCadence {
        UpdateCadence {
            interval: Duration::from_millis(self.interval_ms),
            commit_delay: Duration::from_millis(self.commit_delay_ms),
        }
    }
}
