use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::greeting::say_hello;

pub fn execute_command<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Hello { name }) => _hello(name, out),
        Some(Commands::Completion { shell }) => _completion(*shell, out),
        None => Ok(()),
    }
}

#[instrument(skip(out))]
fn _hello<W: Write>(name: &str, out: &mut W) -> CliResult<()> {
    debug!("name: {:?}", name);
    say_hello(name, out).map_err(|e| CliError::io("write greeting", e))
}

#[instrument(skip(out))]
fn _completion<W: Write>(shell: Shell, out: &mut W) -> CliResult<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    // generate() panics on a failing writer
    let mut script = Vec::new();
    generate(shell, &mut cmd, bin_name, &mut script);
    out.write_all(&script)
        .and_then(|()| out.flush())
        .map_err(|e| CliError::io("write completion script", e))
}
