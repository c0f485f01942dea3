//! Push-client collaborator traits
//!
//! The core does not speak the Loki wire protocol itself. It drives an
//! already-implemented batching push client through the traits in this
//! module: one `PushClient` per severity level, each constructed by a
//! `ClientFactory` from a frozen `ClientConfig`.

pub mod pool;

use std::sync::Arc;
use std::time::Duration;

use crate::core::{PushLevel, Result};

pub use pool::ClientPool;

/// Frozen configuration handed to the factory for one push client.
///
/// Built once per severity level during pool construction; the label string
/// already carries that level's severity label.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Loki push endpoint
    pub push_url: String,
    /// How long to wait before flushing a partial batch
    pub batch_wait: Duration,
    /// Batch size that forces a flush
    pub batch_entries: usize,
    /// Minimum transmission level the client should send
    pub send_level: PushLevel,
    /// Rendered label string, e.g. `{severity="INFO", source="test"}`
    pub labels: String,
}

/// A batching client that delivers log lines to the aggregation endpoint.
///
/// Implementations own their batching buffers and flush timers and must be
/// safe to call from any thread. Errors are returned to the caller unchanged;
/// retries, if any, happen inside the client.
pub trait PushClient: Send + Sync {
    fn debug(&self, line: &str) -> Result<()>;
    fn info(&self, line: &str) -> Result<()>;
    fn warn(&self, line: &str) -> Result<()>;
    fn error(&self, line: &str) -> Result<()>;
}

/// Constructs push clients for the pool builder.
///
/// Blanket-implemented for closures, so tests and callers can wire a factory
/// with a plain `Fn`.
pub trait ClientFactory {
    fn build(&self, config: ClientConfig) -> Result<Arc<dyn PushClient>>;
}

impl<F> ClientFactory for F
where
    F: Fn(ClientConfig) -> Result<Arc<dyn PushClient>>,
{
    fn build(&self, config: ClientConfig) -> Result<Arc<dyn PushClient>> {
        self(config)
    }
}
