use std::io::{BufRead, Write};

use crate::error::{CalcError, Result};

pub const FIRST_PROMPT: &str = "Enter the first number: ";
pub const SECOND_PROMPT: &str = "Enter the second number: ";
pub const INVALID_INPUT: &str = "Invalid input. Please enter numeric values only.";

/// The two numbers the user typed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

impl Operands {
    pub fn new(num1: f64, num2: f64) -> Operands {
        Operands { num1, num2 }
    }
}

/// Parse one line of input as a number, ignoring surrounding whitespace.
pub fn parse_operand(line: &str) -> Result<f64> {
    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| CalcError::InvalidNumber {
            input: trimmed.to_string(),
            source,
        })
}

/// Keeps prompting until one cycle yields two valid numbers.
#[derive(Debug, Clone, Default)]
pub struct OperandReader {
    max_attempts: Option<u32>,
}

impl OperandReader {
    /// Retries forever.
    pub fn new() -> OperandReader {
        OperandReader { max_attempts: None }
    }

    /// `None` retries forever; `Some(n)` gives up after `n` failed cycles.
    pub fn with_max_attempts(max_attempts: Option<u32>) -> OperandReader {
        OperandReader { max_attempts }
    }

    pub fn acquire<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Operands> {
        let mut attempts: u32 = 0;
        loop {
            let err = match read_cycle(input, output) {
                Ok(operands) => {
                    tracing::debug!(attempts = attempts + 1, "operands accepted");
                    return Ok(operands);
                }
                Err(e) if e.is_recoverable() => e,
                Err(e) => return Err(e),
            };

            attempts += 1;
            tracing::debug!(attempt = attempts, error = %err, "rejected operand input");
            writeln!(output, "{}\n", INVALID_INPUT)?;

            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    tracing::warn!(limit, "attempt limit reached");
                    return Err(CalcError::TooManyAttempts(limit));
                }
            }
        }
    }
}

// A bad first number ends the cycle before the second prompt is shown.
fn read_cycle<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Operands> {
    let num1 = read_operand(input, output, FIRST_PROMPT)?;
    let num2 = read_operand(input, output, SECOND_PROMPT)?;
    Ok(Operands::new(num1, num2))
}

fn read_operand<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<f64> {
    let line = console::ask(input, output, text)?.ok_or(CalcError::InputClosed)?;
    parse_operand(&line)
}
