//! CLI logic for the Dayplan calendar tool.
//!
//! This module contains the core CLI logic for the Dayplan calendar tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fmt::Write as _, fs};

use log::info;

use dayplan::{DayBuilder, DayplanError, Event, Placed, TimeSpan};

/// Run the Dayplan CLI application
///
/// This function reads the input schedule, lays out its events and writes
/// the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DayplanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Schedule parsing errors
/// - Events that do not end after they start
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), DayplanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing schedule"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DayBuilder::new(app_config);
    let schedule = builder.parse(&source)?;
    let placed = builder.layout(&schedule)?;

    if args.print_layout {
        print!("{}", format_layout(&placed));
    }

    let svg = builder.render_svg(&placed)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Formats placed events as `start end column clashes name` lines.
pub fn format_layout(placed: &[Placed<Event>]) -> String {
    let mut out = String::new();
    for event in placed {
        writeln!(
            out,
            "{} {} {} {} {}",
            event.start(),
            event.end(),
            event.column(),
            event.clashes(),
            event.label().unwrap_or("-")
        )
        .expect("Writing to String buffer is infallible");
    }
    out
}
