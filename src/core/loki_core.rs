//! Level-routed Loki core
//!
//! `LokiCore` is the backend object itself: it owns the normalized
//! configuration, the per-level client pool, and an immutable field context.
//! Instances form a tree rooted at the one built at startup; `with_fields`
//! children share the pool and configuration by `Arc` and never mutate them,
//! which is what makes concurrent use safe without any locking here.

use std::sync::Arc;

use super::backend::Core;
use super::config::LokiConfig;
use super::error::{CoreError, Result};
use super::fields::FieldSet;
use super::log_entry::LogEntry;
use super::log_level::{LogLevel, PushLevel};
use crate::client::{ClientFactory, ClientPool};

#[derive(Debug)]
pub struct LokiCore {
    config: Arc<LokiConfig>,
    pool: Arc<ClientPool>,
    fields: FieldSet,
}

impl LokiCore {
    /// Build a core from a possibly-partial configuration.
    ///
    /// The configuration is normalized exactly once, then one push client is
    /// constructed per severity level. This is the only fallible operation in
    /// the system: if any client fails to initialize, the error is returned
    /// and no core exists.
    pub fn new<F: ClientFactory>(config: LokiConfig, factory: &F) -> Result<Self> {
        let config = config.normalized();
        let pool = ClientPool::build(&config, factory)?;
        Ok(Self {
            config: Arc::new(config),
            pool: Arc::new(pool),
            fields: FieldSet::new(),
        })
    }

    /// Build a core over a pre-assembled client pool. The configuration is
    /// still normalized; pool contents are taken as-is.
    pub fn with_pool(config: LokiConfig, pool: ClientPool) -> Self {
        Self {
            config: Arc::new(config.normalized()),
            pool: Arc::new(pool),
            fields: FieldSet::new(),
        }
    }

    /// The normalized configuration this core was built with.
    pub fn config(&self) -> &LokiConfig {
        &self.config
    }

    /// The accumulated field context.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }
}

impl Core for LokiCore {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.config.send_level
    }

    fn with_fields(&self, fields: &FieldSet) -> Self {
        Self {
            config: Arc::clone(&self.config),
            pool: Arc::clone(&self.pool),
            fields: self.fields.overlay(fields),
        }
    }

    fn write(&self, entry: &LogEntry, fields: &FieldSet) -> Result<()> {
        // Call-site fields are merged over the ambient context before the
        // line is rendered; they are never dropped.
        let effective = self.fields.overlay(fields);
        let client = self
            .pool
            .get(entry.level)
            .ok_or(CoreError::UnrecognizedLevel(entry.level))?;

        let line = format!("{} | {}", entry.message, effective);
        match entry.level.push_level() {
            PushLevel::Debug => client.debug(&line),
            PushLevel::Info => client.info(&line),
            PushLevel::Warn => client.warn(&line),
            PushLevel::Error => client.error(&line),
        }
    }

    fn flush(&self) -> Result<()> {
        // Batching and flush timing live in the push clients.
        Ok(())
    }
}
