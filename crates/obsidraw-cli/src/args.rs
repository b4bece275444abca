//! Command-line argument definitions for the Obsidraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, canvas styling,
//! SVG output, configuration file selection, and logging verbosity.

use std::ffi::OsString;

use clap::{Parser, error::ErrorKind};

/// Convert Obsidian Excalidraw drawings (`*.excalidraw.md`) to PNG
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input `*.excalidraw.md` file
    pub input: String,

    /// Path to the output PNG file [default: input with `.png` extension]
    pub output: Option<String>,

    /// Background color of the canvas (overrides the configuration)
    #[arg(long, value_name = "COLOR")]
    pub bg: Option<String>,

    /// Padding around the drawing content (overrides the configuration)
    #[arg(long, value_name = "N")]
    pub padding: Option<u32>,

    /// Also save the intermediate SVG file
    #[arg(long)]
    pub save_svg: bool,

    /// Only generate SVG (skip PNG conversion)
    #[arg(long)]
    pub svg_only: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Arguments for converting `input` with every option at its default.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            bg: None,
            padding: None,
            save_svg: false,
            svg_only: false,
            config: None,
            log_level: "info".to_string(),
        }
    }
}

/// Parses the command line, treating a bare invocation as `--help`.
///
/// The returned [`clap::Error`] also covers help and version requests; use
/// [`exit_code`] to tell them apart from usage errors.
pub fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.is_empty() {
        argv.push("obsidraw".into());
    }
    if argv.len() == 1 {
        argv.push("--help".into());
    }
    Args::try_parse_from(argv)
}

/// Process exit status for a command-line parsing outcome: 0 for help and
/// version output, 1 for usage errors.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = Args::try_parse_from(["obsidraw", "Drawing.excalidraw.md"]).unwrap();

        assert_eq!(args.input, "Drawing.excalidraw.md");
        assert_eq!(args.output, None);
        assert!(!args.save_svg);
        assert!(!args.svg_only);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_args() {
        let args = Args::try_parse_from([
            "obsidraw",
            "in.excalidraw.md",
            "out.png",
            "--bg=#000000",
            "--padding=12",
            "--save-svg",
            "--svg-only",
            "-c",
            "custom.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.output.as_deref(), Some("out.png"));
        assert_eq!(args.bg.as_deref(), Some("#000000"));
        assert_eq!(args.padding, Some(12));
        assert!(args.save_svg);
        assert!(args.svg_only);
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_padding_must_be_integer() {
        assert!(Args::try_parse_from(["obsidraw", "in.md", "--padding=wide"]).is_err());
    }

    #[test]
    fn test_input_required() {
        let err = parse_args(["obsidraw", "--save-svg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_bare_invocation_shows_help() {
        let err = parse_args(["obsidraw"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(exit_code(&err), 0);
        assert!(err.to_string().contains("Usage"));

        let err = parse_args(Vec::<String>::new()).unwrap_err();
        assert_eq!(exit_code(&err), 0);
    }

    #[test]
    fn test_help_and_version_exit_cleanly() {
        for flag in ["--help", "-h", "--version"] {
            let err = parse_args(["obsidraw", flag]).unwrap_err();
            assert_eq!(exit_code(&err), 0, "{flag}");
        }
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        let err = parse_args(["obsidraw", "in.md", "--padding=abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(exit_code(&err), 1);

        let err = parse_args(["obsidraw", "in.md", "--unknown"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }
}
