//! Per-level push client pool
//!
//! One push client per front-end severity, each frozen with a label string
//! that encodes that severity. Built once at core construction; read-only
//! afterwards, so it is safe to share across every core instance derived
//! from the same root.

use std::collections::HashMap;
use std::sync::Arc;

use super::{ClientConfig, ClientFactory, PushClient};
use crate::core::labels::compose_labels;
use crate::core::{CoreError, LogLevel, LokiConfig, Result};

pub struct ClientPool {
    clients: HashMap<LogLevel, Arc<dyn PushClient>>,
}

impl std::fmt::Debug for ClientPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientPool")
            .field("levels", &self.clients.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ClientPool {
    /// Build one client per front-end severity from a normalized config.
    ///
    /// If the factory fails for any level the whole build aborts and no
    /// partial pool is returned.
    pub fn build<F: ClientFactory>(config: &LokiConfig, factory: &F) -> Result<Self> {
        let mut clients = HashMap::with_capacity(LogLevel::ALL.len());
        for level in LogLevel::ALL {
            let client_config = ClientConfig {
                push_url: config.url.clone(),
                batch_wait: config.batch_wait,
                batch_entries: config.batch_entries,
                send_level: config.send_level.push_level(),
                labels: compose_labels(&config.labels, &config.level_label, level.to_str()),
            };
            let client = factory
                .build(client_config)
                .map_err(|e| CoreError::client_init(&config.url, e.to_string()))?;
            clients.insert(level, client);
        }
        Ok(Self { clients })
    }

    /// Assemble a pool from pre-built clients, for custom wirings that do not
    /// go through a factory.
    pub fn from_clients(clients: HashMap<LogLevel, Arc<dyn PushClient>>) -> Self {
        Self { clients }
    }

    /// The client frozen for `level`, if one was built.
    pub fn get(&self, level: LogLevel) -> Option<&Arc<dyn PushClient>> {
        self.clients.get(&level)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
