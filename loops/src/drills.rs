use std::io::{BufRead, Write};

use num::{BigUint, One};

use crate::error::{LoopsError, Result};

pub const ECHO_PROMPT: &str = "Enter something (or type 'exit' to quit): ";
pub const FACTORIAL_PROMPT: &str = "Enter a number to calculate its factorial: ";

/// Largest n we compute n! for (35,660 digits).
pub const MAX_FACTORIAL: i64 = 10_000;

/// `for` loop: count from 1 to 10 on one line.
pub fn print_numbers<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Printing numbers from 1 to 10:")?;
    for i in 1..=10 {
        write!(output, "{} ", i)?;
    }
    writeln!(output, "\n")?;
    Ok(())
}

/// `while` loop: echo lines back until the user types `exit` (any case) or input ends.
///
/// Returns how many lines were echoed.
pub fn echo_until_exit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    let mut echoed = 0;
    while let Some(line) = console::ask(input, output, ECHO_PROMPT)? {
        if line.to_lowercase() == "exit" {
            break;
        }
        writeln!(output, "You entered: {}", line)?;
        echoed += 1;
    }
    writeln!(output, "Exited input loop.\n")?;
    tracing::debug!(echoed, "echo loop finished");
    Ok(echoed)
}

/// n! for `0 <= n <= MAX_FACTORIAL`.
pub fn factorial(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(LoopsError::NegativeFactorial(n));
    }
    if n > MAX_FACTORIAL {
        return Err(LoopsError::TooLarge(n));
    }
    let mut result = BigUint::one();
    for i in 2..=n as u64 {
        result *= i;
    }
    Ok(result)
}

/// Parse a trimmed 32-bit integer.
pub fn parse_integer(line: &str) -> Result<i32> {
    line.trim()
        .parse::<i32>()
        .map_err(|_| LoopsError::InvalidInteger(line.to_string()))
}

/// Ask for a number and print its factorial, or explain why not.
///
/// Bad input is reported on `output`, not returned.
pub fn factorial_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let line = console::ask(input, output, FACTORIAL_PROMPT)?.unwrap_or_default();
    let outcome = parse_integer(&line).and_then(|n| factorial(n.into()).map(|f| (n, f)));
    match outcome {
        Ok((n, f)) => writeln!(output, "Factorial of {} is: {}", n, f)?,
        Err(e) => {
            tracing::debug!(input = %line.trim(), error = ?e, "factorial refused");
            writeln!(output, "{}", e)?;
        }
    }
    Ok(())
}
