//! Interactive input of the interval count.

use std::io::{BufRead, Write};

use tracing::debug;

use pisweep_core::constants::MAX_INTERVALS;
use pisweep_core::error::PiError;

/// Prompt printed before reading the interval count.
pub const PROMPT: &str = "Podaj liczbę przedziałów: ";

/// Message printed to the error stream when a line is rejected.
pub const REJECTED: &str = "Nieprawidłowa liczba przedziałów, podaj dodatnią liczbę całkowitą.";

/// Parse a positive interval count.
pub fn parse_intervals(input: &str) -> Result<u64, PiError> {
    let trimmed = input.trim();
    let n: u64 = trimmed
        .parse()
        .map_err(|_| PiError::InvalidIntervals(format!("'{trimmed}' is not a positive integer")))?;
    if n == 0 {
        return Err(PiError::InvalidIntervals(
            "interval count must be positive".into(),
        ));
    }
    if n > MAX_INTERVALS {
        return Err(PiError::InvalidIntervals(format!(
            "interval count must not exceed {MAX_INTERVALS}"
        )));
    }
    Ok(n)
}

/// Prompt on `out` until `input` yields a valid interval count.
///
/// Rejected lines are reported on `err` and the prompt is repeated. End of
/// input before a valid line is an error.
pub fn prompt_intervals<R, W, E>(input: &mut R, out: &mut W, err: &mut E) -> Result<u64, PiError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let io_err = |e: std::io::Error| PiError::Input(e.to_string());
    let mut line = String::new();

    loop {
        out.write_all(PROMPT.as_bytes()).map_err(io_err)?;
        out.flush().map_err(io_err)?;

        line.clear();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err(PiError::Input(
                "end of input before a valid interval count".into(),
            ));
        }

        match parse_intervals(&line) {
            Ok(n) => return Ok(n),
            Err(e) => {
                debug!(%e, "rejected interval count");
                writeln!(err, "{REJECTED}").map_err(io_err)?;
            }
        }
    }
}
