//! Command-line argument parsing for the eventfeed CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: eventfeed [OPTIONS] [FILE]

Parse a Server-Sent Events stream from FILE (or stdin when FILE is omitted
or '-') and print what it contains.

Options:
      --json              Print each parsed value as one JSON line (default)
      --deltas            Print chat-completion text deltas
      --chunk-size <N>    Read the input N bytes at a time
      --reconnect         Also print reconnect intervals from retry fields
      --strict-utf8       Fail on invalid UTF-8 instead of replacing it
  -h, --help              Print help
  -V, --version           Print version

Logging is controlled by RUST_LOG (default: warn).";

/// How parsed values are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON object per parsed value
    #[default]
    Json,
    /// Concatenated completion text
    Deltas,
}

/// Options for the default run command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Input file; `None` reads stdin
    pub input: Option<PathBuf>,
    pub output: OutputMode,
    /// Read size; `None` uses the adapter default
    pub chunk_size: Option<usize>,
    pub include_reconnect_intervals: bool,
    pub strict_utf8: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Parse an input stream (default)
    Run(RunOptions),
}

/// Errors from argument parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid chunk size '{0}': expected a positive integer")]
    InvalidChunkSize(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected extra argument: {0}")]
    UnexpectedArgument(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use eventfeed::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["eventfeed".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--json" => options.output = OutputMode::Json,
            "--deltas" => options.output = OutputMode::Deltas,
            "--reconnect" => options.include_reconnect_intervals = true,
            "--strict-utf8" => options.strict_utf8 = true,
            "--chunk-size" => {
                let value = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.chunk_size = Some(parse_chunk_size(&value)?);
            }
            "-" => set_input(&mut options, arg.as_str())?,
            _ => {
                if let Some(value) = arg.strip_prefix("--chunk-size=") {
                    options.chunk_size = Some(parse_chunk_size(value)?);
                } else if arg.starts_with('-') {
                    return Err(ArgsError::UnknownOption(arg));
                } else {
                    set_input(&mut options, arg.as_str())?;
                }
            }
        }
    }

    Ok(CliCommand::Run(options))
}

fn parse_chunk_size(value: &str) -> Result<usize, ArgsError> {
    match value.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ArgsError::InvalidChunkSize(value.to_string())),
    }
}

fn set_input(options: &mut RunOptions, arg: &str) -> Result<(), ArgsError> {
    if options.input.is_some() {
        return Err(ArgsError::UnexpectedArgument(arg.to_string()));
    }
    // "-" is an explicit request for stdin
    options.input = (arg != "-").then(|| PathBuf::from(arg));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("eventfeed")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["stream.txt", "--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_parse_full_options() {
        let command = parse(&[
            "--deltas",
            "--chunk-size",
            "16",
            "--reconnect",
            "--strict-utf8",
            "stream.txt",
        ]);
        assert_eq!(
            command,
            Ok(CliCommand::Run(RunOptions {
                input: Some(PathBuf::from("stream.txt")),
                output: OutputMode::Deltas,
                chunk_size: Some(16),
                include_reconnect_intervals: true,
                strict_utf8: true,
            }))
        );
    }

    #[test]
    fn test_parse_chunk_size_equals_form() {
        let Ok(CliCommand::Run(options)) = parse(&["--chunk-size=1"]) else {
            panic!("expected run command");
        };
        assert_eq!(options.chunk_size, Some(1));
    }

    #[test]
    fn test_parse_dash_means_stdin() {
        let Ok(CliCommand::Run(options)) = parse(&["-"]) else {
            panic!("expected run command");
        };
        assert_eq!(options.input, None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["--chunk-size"]),
            Err(ArgsError::MissingValue("--chunk-size".to_string()))
        );
        assert_eq!(
            parse(&["--chunk-size", "0"]),
            Err(ArgsError::InvalidChunkSize("0".to_string()))
        );
        assert_eq!(
            parse(&["--bogus"]),
            Err(ArgsError::UnknownOption("--bogus".to_string()))
        );
        assert_eq!(
            parse(&["a.txt", "b.txt"]),
            Err(ArgsError::UnexpectedArgument("b.txt".to_string()))
        );
    }
}
