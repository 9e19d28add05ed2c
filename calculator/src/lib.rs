//! Two-number console calculator
//!
//! Prompts for two numbers (retrying on anything that doesn't parse), then
//! prints their sum, difference, product and quotient, and whether the sum
//! is even or odd.

pub mod error;
pub mod operands;
pub mod report;

use std::io::{BufRead, Write};

pub use error::{CalcError, Result};
pub use operands::{parse_operand, OperandReader, Operands};
pub use report::{compute_and_report, Parity, Report};

/// Acquire operands, using the attempt cap from `config`.
pub fn acquire_operands<R: BufRead, W: Write>(
    config: &console::Config,
    input: &mut R,
    output: &mut W,
) -> Result<Operands> {
    OperandReader::with_max_attempts(config.input.attempt_limit()).acquire(input, output)
}

/// One full session: prompt until valid, then report.
pub fn run<R: BufRead, W: Write>(
    config: &console::Config,
    input: &mut R,
    output: &mut W,
) -> Result<Report> {
    let operands = acquire_operands(config, input, output)?;
    compute_and_report(operands, output)
}
