//! Application error handling
//!
//! This module provides unified error handling for the CLI,
//! converting internal errors to process exit codes.

use imc_calculator_shared::{UnknownModeError, ValidationError};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, warn};

/// CLI error type that can be converted to an exit code
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Numeric process status for this error
    pub fn code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 1,
            CliError::UnknownMode(_) => 2,
            CliError::Config(_) | CliError::Io(_) => 3,
        }
    }

    /// Log the error and convert it to an exit code
    pub fn into_exit_code(self) -> ExitCode {
        match &self {
            CliError::Validation(err) => {
                warn!(field = err.field(), "Session rejected input");
            }
            CliError::UnknownMode(err) => {
                warn!(mode = %err.0, "Unknown session mode");
            }
            CliError::Config(err) => error!("Configuration error: {:?}", err),
            CliError::Io(err) => error!("I/O error: {:?}", err),
        }
        ExitCode::from(self.code())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
