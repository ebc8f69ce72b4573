//! Validated input prompts
//!
//! Each prompt loops until the input parses, printing an error line and
//! re-prompting on bad input; the caller never receives an invalid value.
//! End of input is reported as `Ok(None)` so the shell can terminate
//! gracefully when the stream closes.

use std::io::{BufRead, Write};

use crate::error::InventoryResult;
use crate::models::Money;

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R) -> InventoryResult<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a single whitespace-delimited token, re-prompting while the
/// line holds none
pub fn prompt_token<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> InventoryResult<Option<String>> {
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
        writeln!(writer, "Input cannot be empty.")?;
    }
}

/// Prompt for a non-negative whole number
///
/// Non-numeric and negative input is rejected with an error line and the
/// prompt repeats until a value >= 0 is supplied.
pub fn prompt_quantity<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> InventoryResult<Option<u32>> {
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        match line.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                writeln!(writer, "Invalid input. Please enter a non-negative whole number.")?;
            }
        }
    }
}

/// Prompt for a non-negative money amount
pub fn prompt_price<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> InventoryResult<Option<Money>> {
    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        match Money::parse(&line) {
            Ok(amount) if !amount.is_negative() => return Ok(Some(amount)),
            Ok(_) => writeln!(writer, "Price cannot be negative.")?,
            Err(_) => {
                writeln!(writer, "Invalid input. Please enter an amount like 2.50.")?;
            }
        }
    }
}
