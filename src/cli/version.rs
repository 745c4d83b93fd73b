//! Version information for the eventfeed CLI.

/// The current version of eventfeed, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("eventfeed {}", VERSION)
}
