//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to `err`
pub fn error<W: Write + ?Sized>(err: &mut W, msg: &(impl std::fmt::Display + ?Sized)) {
    writeln!(err, "{}: {}", "error".red().bold(), msg).ok();
}

/// Print plain output (no color) to `out`
pub fn info<W: Write + ?Sized>(
    out: &mut W,
    msg: &(impl std::fmt::Display + ?Sized),
) -> std::io::Result<()> {
    writeln!(out, "{}", msg)
}
