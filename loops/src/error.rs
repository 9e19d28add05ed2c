//! Error types for the loop drills

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoopsError {
    #[error("Factorial is not defined for negative numbers.")]
    NegativeFactorial(i64),

    #[error("Factorial is only computed for numbers up to {}.", crate::drills::MAX_FACTORIAL)]
    TooLarge(i64),

    #[error("Invalid input. Please enter an integer.")]
    InvalidInteger(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoopsError>;
