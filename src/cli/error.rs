//! CLI-level errors (wraps infrastructure errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { source, .. } => match source.kind() {
                    io::ErrorKind::NotFound => crate::exitcode::NOINPUT,
                    io::ErrorKind::PermissionDenied => crate::exitcode::NOPERM,
                    _ => crate::exitcode::IOERR,
                },
                InfraError::Application(ApplicationError::Domain(_)) => crate::exitcode::DATAERR,
                InfraError::Application(ApplicationError::Filesystem { source, .. }) => {
                    match source.kind() {
                        io::ErrorKind::PermissionDenied => crate::exitcode::NOPERM,
                        _ => crate::exitcode::CANTCREAT,
                    }
                }
                InfraError::Application(ApplicationError::Config { .. }) => {
                    crate::exitcode::CONFIG
                }
            },
        }
    }
}
