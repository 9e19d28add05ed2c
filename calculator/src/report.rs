use std::fmt::{Display, Formatter};
use std::io::Write;

use crate::error::Result;
use crate::operands::Operands;

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Even iff the float remainder by 2 compares equal to zero.
    ///
    /// Fractional, infinite and NaN values all land on `Odd`.
    pub fn of(value: f64) -> Parity {
        if value % 2.0 == 0.0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl Display for Parity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    /// `None` when the divisor is zero
    pub quotient: Option<f64>,
    pub parity: Parity,
}

impl Report {
    pub fn compute(operands: Operands) -> Report {
        let Operands { num1, num2 } = operands;
        let sum = num1 + num2;
        Report {
            sum,
            difference: num1 - num2,
            product: num1 * num2,
            quotient: if num2 == 0.0 { None } else { Some(num1 / num2) },
            parity: Parity::of(sum),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "Addition: {}", self.sum)?;
        writeln!(f, "Subtraction: {}", self.difference)?;
        writeln!(f, "Multiplication: {}", self.product)?;
        match self.quotient {
            Some(quotient) => writeln!(f, "Division: {}", quotient)?,
            None => writeln!(f, "Division: {}", DIVIDE_BY_ZERO)?,
        }
        write!(f, "The sum is {}.", self.parity)
    }
}

/// Compute the results for `operands` and print them after a blank line.
pub fn compute_and_report<W: Write>(operands: Operands, output: &mut W) -> Result<Report> {
    let report = Report::compute(operands);
    writeln!(output, "\n{}", report)?;
    output.flush()?;
    Ok(report)
}
