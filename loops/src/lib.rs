//! Loop and function drills
//!
//! - `for` loop counting 1 to 10
//! - `while` loop echoing input until `exit`
//! - factorial as a plain function

pub mod drills;
pub mod error;

use std::io::{BufRead, Write};

pub use drills::{echo_until_exit, factorial, factorial_prompt, parse_integer, print_numbers};
pub use error::{LoopsError, Result};

/// Run all three drills in order.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    print_numbers(output)?;
    echo_until_exit(input, output)?;
    factorial_prompt(input, output)?;
    output.flush()?;
    Ok(())
}
