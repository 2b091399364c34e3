//! Export functionality for laid-out days.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a laid-out day to an output format. It is the final stage in the
//! Dayplan processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Schedule
//!     ↓ layout
//! Placed events
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! [`canvas`] holds the mapping from minutes and columns to pixels shared by
//! the backends.
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`DayplanError::Export`] at the crate
//! boundary.
//!
//! [`DayplanError::Export`]: crate::DayplanError::Export

pub mod canvas;
/// SVG export backend.
pub mod svg;

use std::io;

use dayplan_core::event::{Event, Placed};

/// Abstraction for day export backends.
pub trait Exporter {
    /// Writes the placed events of one day to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the day cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_day<W: io::Write>(&mut self, placed: &[Placed<Event>], writer: W)
    -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// This type is converted into [`DayplanError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`DayplanError::Export`]: crate::DayplanError::Export
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    #[error("Render error: {0}")]
    Render(String),
    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}
