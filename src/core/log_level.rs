//! Log level definitions
//!
//! Two enumerations live here:
//! - `LogLevel`: the severities the logging front end hands us
//! - `PushLevel`: the levels the push client actually transmits at
//!
//! The mapping between them is many-to-one: everything at `Error` or above
//! collapses onto the `Error` transmission level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CoreError;

/// Severity levels recognized from the logging front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Critical = 4,
    Fatal = 5,
}

/// Transmission levels supported by the push client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PushLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Every front-end severity, in ascending order. The client pool builds
    /// one push client per element.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Map a front-end severity onto the transmission level the push client
    /// understands. Total: `Critical` and `Fatal` collapse to `Error`.
    pub fn push_level(&self) -> PushLevel {
        match self {
            LogLevel::Debug => PushLevel::Debug,
            LogLevel::Info => PushLevel::Info,
            LogLevel::Warn => PushLevel::Warn,
            LogLevel::Error | LogLevel::Critical | LogLevel::Fatal => PushLevel::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(CoreError::InvalidLevel(s.to_string())),
        }
    }
}
