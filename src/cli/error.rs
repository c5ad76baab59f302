//! CLI-level errors

use thiserror::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing argument, unknown command or flag; rendered by clap.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn usage_maps_to_usage_exit_code() {
        let err = CliError::from(clap::Error::new(clap::error::ErrorKind::InvalidSubcommand));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn io_carries_context() {
        let err = CliError::io("write greeting", io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
        assert_eq!(err.to_string(), "I/O error: write greeting");
    }
}
