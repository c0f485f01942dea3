//! Error types for the Loki core

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A push client failed to initialize during pool construction
    #[error("unable to initialize push client for '{url}': {message}")]
    ClientInit { url: String, message: String },

    /// A write was attempted for a severity with no mapped push client
    #[error("unrecognized log level: {0}")]
    UnrecognizedLevel(LogLevel),

    /// The underlying push client failed to deliver a log line
    #[error("transmission failed: {message}")]
    Transmission { message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A level string could not be parsed
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create a client initialization error
    pub fn client_init(url: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::ClientInit {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a transmission error
    pub fn transmission(message: impl Into<String>) -> Self {
        CoreError::Transmission {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CoreError::Other(msg.into())
    }
}
