//! Command-line argument definitions for the Dayplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, logging verbosity and the plain-text layout listing.

use clap::Parser;

/// Command-line arguments for the Dayplan calendar tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input schedule
    #[arg(help = "Path to the input schedule (TOML)")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "day.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the computed layout to stdout, one event per line
    #[arg(long)]
    pub print_layout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["dayplan", "today.toml"]).unwrap();
        assert_eq!(args.input, "today.toml");
        assert_eq!(args.output, "day.svg");
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
        assert!(!args.print_layout);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "dayplan",
            "today.toml",
            "-o",
            "out/today.svg",
            "-c",
            "dayplan.toml",
            "--log-level",
            "debug",
            "--print-layout",
        ])
        .unwrap();
        assert_eq!(args.output, "out/today.svg");
        assert_eq!(args.config.as_deref(), Some("dayplan.toml"));
        assert_eq!(args.log_level, "debug");
        assert!(args.print_layout);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["dayplan"]).is_err());
    }
}
