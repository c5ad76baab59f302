//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// A command line utility skeleton.
#[derive(Parser, Debug)]
#[command(name = "cli-app")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Say hello
    #[command(visible_alias = "H")]
    Hello {
        /// Who to greet
        name: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
