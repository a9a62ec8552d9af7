//! Snapshot run configuration
//!
//! The fixed paths and cadence from the original tool become explicit,
//! constructor-passed values with the historical defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use worksnap_core::platform::AppId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Application whose catalog is queried
    pub app_id: AppId,

    /// Destination of the JSON snapshot, overwritten on every run
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Destination of the plain-text debug log, truncated on every run
    #[serde(default = "default_debug_log_path")]
    pub debug_log_path: PathBuf,

    /// Callback pump cadence in milliseconds
    #[serde(default = "default_pump_interval_ms")]
    pub pump_interval_ms: u64,

    /// Upper bound on waiting for the query completion; `None` waits
    /// indefinitely and relies entirely on pump liveness
    #[serde(default = "default_completion_timeout_secs")]
    pub completion_timeout_secs: Option<u64>,
}

impl SnapshotConfig {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            snapshot_path: default_snapshot_path(),
            debug_log_path: default_debug_log_path(),
            pump_interval_ms: default_pump_interval_ms(),
            completion_timeout_secs: default_completion_timeout_secs(),
        }
    }

    pub fn pump_interval(&self) -> Duration {
        Duration::from_millis(self.pump_interval_ms)
    }

    pub fn completion_timeout(&self) -> Option<Duration> {
        self.completion_timeout_secs.map(Duration::from_secs)
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("LOG.JSON")
}

fn default_debug_log_path() -> PathBuf {
    PathBuf::from("debug_log.txt")
}

fn default_pump_interval_ms() -> u64 {
    33
}

fn default_completion_timeout_secs() -> Option<u64> {
    Some(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_historical_paths() {
        let config = SnapshotConfig::new(AppId(431960));
        assert_eq!(config.snapshot_path, PathBuf::from("LOG.JSON"));
        assert_eq!(config.debug_log_path, PathBuf::from("debug_log.txt"));
        assert_eq!(config.pump_interval(), Duration::from_millis(33));
        assert_eq!(config.completion_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn deserializes_with_defaults_filled_in() {
        let config: SnapshotConfig = serde_json::from_str(r#"{"app_id": 431960}"#).unwrap();
        assert_eq!(config.app_id, AppId(431960));
        assert_eq!(config.pump_interval_ms, 33);
        assert_eq!(config.completion_timeout_secs, Some(30));
    }
}
