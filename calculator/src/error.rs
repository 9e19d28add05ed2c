//! Error types for the calculator

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("'{input}' is not a number: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Input closed before two valid numbers were entered")]
    InputClosed,

    #[error("Gave up after {0} invalid attempts")]
    TooManyAttempts(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalcError {
    /// Faults that restart the prompt cycle instead of ending the program.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::InvalidNumber { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
