//! Loki client configuration and defaulting
//!
//! A `LokiConfig` may arrive partially filled (e.g. deserialized from an
//! application config file). `normalized` fills every unset field with its
//! documented default, once, before the core is built; after that the
//! configuration is read-only for the lifetime of the core.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::log_level::LogLevel;

/// Default Loki ingestion endpoint
pub const DEFAULT_PUSH_URL: &str = "http://localhost:3100/api/prom/push";

/// Default name of the label carrying the severity
pub const DEFAULT_LEVEL_LABEL: &str = "severity";

/// Default interval the push client waits before flushing a partial batch
pub const DEFAULT_BATCH_WAIT: Duration = Duration::from_secs(5);

/// Default number of entries that forces a batch flush
pub const DEFAULT_BATCH_ENTRIES: usize = 10_000;

/// Base configuration for the Loki core and its push clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LokiConfig {
    /// Loki push endpoint
    pub url: String,
    /// Name of the label that carries the severity value
    pub level_label: String,
    /// Minimum severity that is shipped at all
    pub send_level: LogLevel,
    /// Extra labels attached to every batch
    pub labels: HashMap<String, String>,
    /// How long the push client waits before flushing a partial batch
    pub batch_wait: Duration,
    /// Batch size that forces a flush
    pub batch_entries: usize,
}

impl Default for LokiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            level_label: String::new(),
            send_level: LogLevel::Info,
            labels: HashMap::new(),
            batch_wait: Duration::ZERO,
            batch_entries: 0,
        }
    }
}

impl LokiConfig {
    /// Fill every unset field with its documented default.
    ///
    /// Pure defaulting, total over all inputs: each rule fires only when its
    /// field is at the zero value, so a config that is already fully set
    /// passes through unchanged.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.url.is_empty() {
            self.url = DEFAULT_PUSH_URL.to_string();
        }
        if self.level_label.is_empty() {
            self.level_label = DEFAULT_LEVEL_LABEL.to_string();
        }
        if self.labels.is_empty() {
            self.labels = HashMap::from([
                ("source".to_string(), "test".to_string()),
                ("job".to_string(), "job".to_string()),
            ]);
        }
        // The upstream adapter this replaces compared against a one-second
        // sentinel here instead of the unset value; corrected to the zero
        // check. See DESIGN.md.
        if self.batch_wait == Duration::ZERO {
            self.batch_wait = DEFAULT_BATCH_WAIT;
        }
        if self.batch_entries == 0 {
            self.batch_entries = DEFAULT_BATCH_ENTRIES;
        }
        self
    }
}
