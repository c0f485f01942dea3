//! Basic usage of the Loki core with a stdout push client
//!
//! A real deployment would plug in a batching HTTP client here; this demo
//! prints what each per-level client would transmit.

use loki_core::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Stand-in push client that prints instead of transmitting.
struct StdoutClient {
    labels: String,
}

impl StdoutClient {
    fn print(&self, level: &str, line: &str) -> Result<()> {
        println!("[{}] {} {}", level, self.labels, line);
        Ok(())
    }
}

impl PushClient for StdoutClient {
    fn debug(&self, line: &str) -> Result<()> {
        self.print("debug", line)
    }
    fn info(&self, line: &str) -> Result<()> {
        self.print("info", line)
    }
    fn warn(&self, line: &str) -> Result<()> {
        self.print("warn", line)
    }
    fn error(&self, line: &str) -> Result<()> {
        self.print("error", line)
    }
}

fn main() -> Result<()> {
    let config = LokiConfig {
        labels: HashMap::from([("app".to_string(), "demo".to_string())]),
        send_level: LogLevel::Info,
        ..LokiConfig::default()
    };

    let factory = |config: ClientConfig| -> Result<Arc<dyn PushClient>> {
        Ok(Arc::new(StdoutClient {
            labels: config.labels,
        }))
    };

    let core = LokiCore::new(config, &factory)?;
    let core = core.with_fields(&FieldSet::new().with_field("session", "demo-1"));

    for (level, message) in [
        (LogLevel::Debug, "this one is below the send level"),
        (LogLevel::Info, "service started"),
        (LogLevel::Warn, "cache miss rate high"),
        (LogLevel::Fatal, "shipped at the error transmission level"),
    ] {
        let entry = LogEntry::new(level, message);
        if core.enabled(entry.level) {
            core.write(&entry, &FieldSet::new().with_field("seq", 1))?;
        }
    }

    core.flush()
}
