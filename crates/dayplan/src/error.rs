//! Error types for Dayplan operations.
//!
//! This module provides the main error type [`DayplanError`] which wraps
//! the error conditions that can occur while reading, laying out and
//! rendering a day.

use std::io;

use thiserror::Error;

use dayplan_core::event::InvalidEvent;

/// The main error type for Dayplan operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the schedule source next to the TOML error, so
/// reporters can point at the offending span.
#[derive(Debug, Error)]
pub enum DayplanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: toml::de::Error, src: String },

    #[error(transparent)]
    InvalidEvent(#[from] InvalidEvent),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for DayplanError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DayplanError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
