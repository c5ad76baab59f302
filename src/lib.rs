//! cli-app: a command line utility skeleton
//!
//! Parses the process arguments with clap and dispatches the single
//! `hello <name>` subcommand to the greeting operation.

pub mod cli;
pub mod exitcode;
pub mod greeting;
pub mod util;

/// Version reported by `-V` / `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
