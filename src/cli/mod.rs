//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands};
pub use commands::execute_command;
pub use error::{CliError, CliResult};

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::exitcode;
use crate::util::logging;

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// What the argument vector asks for.
#[derive(Debug)]
pub enum Parsed {
    /// A subcommand to execute.
    Run(Cli),
    /// `-V` / `--version`
    Version,
    /// `-h` / `--help`, with the rendered help text.
    Help(String),
}

/// Parse `args`, which exclude the program path.
///
/// A version flag anywhere before `--` wins over everything else on the line,
/// including unknown commands and missing arguments.
pub fn parse_args<I, T>(args: I) -> CliResult<Parsed>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if asks_for_version(&args) {
        return Ok(Parsed::Version);
    }

    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args);
    match Cli::try_parse_from(argv) {
        Ok(cli) => Ok(Parsed::Run(cli)),
        Err(e) => match e.kind() {
            ErrorKind::DisplayVersion => Ok(Parsed::Version),
            ErrorKind::DisplayHelp => Ok(Parsed::Help(e.render().to_string())),
            _ => Err(e.into()),
        },
    }
}

fn asks_for_version(args: &[OsString]) -> bool {
    args.iter()
        .take_while(|a| a.as_os_str() != "--")
        .any(|a| a.as_os_str() == "-V" || a.as_os_str() == "--version")
}

/// Parse, dispatch and report; returns the process exit code.
///
/// Normal output goes to `out`, diagnostics to `err`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
    E: Write,
{
    match dispatch(args, out) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            report(&e, err);
            e.exit_code()
        }
    }
}

fn dispatch<I, T, O>(args: I, out: &mut O) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write,
{
    match parse_args(args)? {
        Parsed::Version => {
            output::info(out, crate::VERSION).map_err(|e| CliError::io("write version", e))
        }
        Parsed::Help(text) => write!(out, "{}", text).map_err(|e| CliError::io("write help", e)),
        Parsed::Run(cli) => {
            logging::init(cli.debug);
            debug!("command: {:?}", cli.command);
            execute_command(&cli, out)
        }
    }
}

fn report<E: Write>(e: &CliError, err: &mut E) {
    match e {
        // clap renders its own "error:" prefix and usage hint
        CliError::Usage(usage) => {
            let _ = write!(err, "{}", usage.render());
        }
        _ => output::error(err, e),
    }
}
