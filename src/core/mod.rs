//! Core types and the level-routed backend

pub mod backend;
pub mod config;
pub mod error;
pub mod fields;
pub mod labels;
pub mod log_entry;
pub mod log_level;
pub mod loki_core;

pub use backend::Core;
pub use config::{
    LokiConfig, DEFAULT_BATCH_ENTRIES, DEFAULT_BATCH_WAIT, DEFAULT_LEVEL_LABEL, DEFAULT_PUSH_URL,
};
pub use error::{CoreError, Result};
pub use fields::{FieldSet, FieldValue};
pub use labels::compose_labels;
pub use log_entry::LogEntry;
pub use log_level::{LogLevel, PushLevel};
pub use loki_core::LokiCore;
