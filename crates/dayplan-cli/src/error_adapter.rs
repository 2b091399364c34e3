//! Error adapter for converting DayplanError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Schedule parse
//! errors keep their source text so the offending span can be shown.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use dayplan::DayplanError;

/// Adapter for a TOML parse error in a schedule.
pub struct ParseAdapter<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    /// Create a new parse error adapter.
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid schedule: {}", self.err.message())
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("dayplan::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "each [[event]] needs integer `start` and `end` minutes; `name` and `location` are optional",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let label = LabeledSpan::new_primary_with_span(
            Some(self.err.message().to_string()),
            SourceSpan::from(span),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`DayplanError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a DayplanError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DayplanError::Io(_) => "dayplan::io",
            DayplanError::Parse { .. } => "dayplan::parse",
            DayplanError::InvalidEvent(_) => "dayplan::invalid_event",
            DayplanError::Config(_) => "dayplan::config",
            DayplanError::Export(_) => "dayplan::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            DayplanError::InvalidEvent(invalid) => Some(Box::new(format!(
                "events are numbered from 0 in file order; give event #{} an `end` after {}",
                invalid.index(),
                invalid.start()
            ))),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A schedule parse error with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`DayplanError`] into a list of reportable errors.
pub fn to_reportables(err: &DayplanError) -> Vec<Reportable<'_>> {
    match err {
        DayplanError::Parse { err: parse_err, src } => {
            vec![Reportable::Parse(ParseAdapter::new(parse_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
