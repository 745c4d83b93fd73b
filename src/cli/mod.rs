//! CLI module for eventfeed.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Parsing an input stream and printing its events or text deltas
//!
//! # Usage
//!
//! ```ignore
//! use eventfeed::cli::{parse_args, run, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Run(options) => {
//!         runtime.block_on(run(&options, &mut std::io::stdout().lock()))?;
//!     }
//!     other => { /* version / help */ }
//! }
//! ```

pub mod args;
pub mod run;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, OutputMode, RunOptions, USAGE};
pub use run::{run, run_reader, RunSummary};
pub use version::{version_line, VERSION};
