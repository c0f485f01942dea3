//! # Loki Core
//!
//! A pluggable structured-logging backend that ships log entries to a
//! Grafana Loki ingestion endpoint, routed through one batching push client
//! per severity level.
//!
//! ## Features
//!
//! - **Level Routing**: One push client per severity, each frozen with a
//!   label set that encodes that severity
//! - **Immutable Context Chaining**: `with_fields` produces a new core;
//!   no two live instances share mutable state
//! - **Thread Safe**: Configuration and client pool are read-only after
//!   construction and shared by `Arc`
//! - **Pluggable**: Any front end that can drive the four-operation `Core`
//!   trait can host this backend; any batching client implementing
//!   `PushClient` can carry the lines

pub mod client;
pub mod core;

pub mod prelude {
    pub use crate::client::{ClientConfig, ClientFactory, ClientPool, PushClient};
    pub use crate::core::{
        Core, CoreError, FieldSet, FieldValue, LogEntry, LogLevel, LokiConfig, LokiCore,
        PushLevel, Result,
    };
}

pub use client::{ClientConfig, ClientFactory, ClientPool, PushClient};
pub use core::{
    Core, CoreError, FieldSet, FieldValue, LogEntry, LogLevel, LokiConfig, LokiCore, PushLevel,
    Result,
};
