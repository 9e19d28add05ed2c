//! Line-oriented prompt/read helpers
//!
//! Everything takes generic readers and writers so the programs can be
//! driven from tests with in-memory buffers.

use std::io::{self, BufRead, Write};

/// Write `text` without a trailing newline and flush so it shows before we block on input.
pub fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "{}", text)?;
    output.flush()
}

/// Read one line, stripping the line terminator.
///
/// Returns `Ok(None)` once the input is exhausted. Bytes that aren't valid
/// UTF-8 decode to `U+FFFD` instead of failing the read.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Prompt, then read the answer.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    prompt(output, text)?;
    read_line(input)
}
