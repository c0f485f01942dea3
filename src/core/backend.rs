//! The pluggable-backend capability
//!
//! A structured-logging front end drives a backend through these four
//! operations. Any type implementing `Core` can be hosted by any front end
//! that can be expressed in terms of them.

use super::error::Result;
use super::fields::FieldSet;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;

pub trait Core {
    /// Whether an entry at `level` should be written at all.
    fn enabled(&self, level: LogLevel) -> bool;

    /// Return a new backend carrying this one's field context extended with
    /// `fields`. The receiver is never mutated.
    #[must_use]
    fn with_fields(&self, fields: &FieldSet) -> Self
    where
        Self: Sized;

    /// Serialize the entry together with the accumulated and call-site fields
    /// and hand it to the destination.
    fn write(&self, entry: &LogEntry, fields: &FieldSet) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> Result<()>;
}
