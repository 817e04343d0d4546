//! Error types for the IMC calculator

use thiserror::Error;

/// Input validation failures raised by a session
///
/// Each field has exactly one error: unparsable text and out-of-range
/// values produce the same message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Peso inválido. Digite um valor numérico entre 0,2 e 700,00.")]
    InvalidWeight,

    #[error("Altura inválida. Digite um valor numérico entre 0,2 e 2,60.")]
    InvalidHeight,
}

impl ValidationError {
    /// Name of the rejected field, for log output
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidWeight => "weight",
            ValidationError::InvalidHeight => "height",
        }
    }
}

/// Session mode token that does not name a known mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown session mode: {0}")]
pub struct UnknownModeError(pub String);
