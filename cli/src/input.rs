//! Local inputs: session blobs and the confirmation prompt.
//!
//! A blob argument is either the JSON itself or a path to a file holding
//! it. Anything whose first non-blank character is `{` is taken as inline
//! JSON; everything else is read from disk. Parsing is left to the session
//! model so malformed blobs degrade the same way they do in the browser.

use std::io::{BufRead, Write};

use crate::error::CliError;

/// Resolve an optional blob argument to its raw JSON text.
///
/// # Errors
///
/// Returns [`CliError::ReadInput`] when a path cannot be read.
pub fn read_blob(arg: Option<&str>) -> Result<Option<String>, CliError> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    if arg.trim_start().starts_with('{') {
        return Ok(Some(arg.to_owned()));
    }
    std::fs::read_to_string(arg)
        .map(Some)
        .map_err(|source| CliError::ReadInput { path: arg.to_owned(), source })
}

/// `true` for an affirmative answer (`y`/`yes`, any case).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Print `prompt` and read one line from `input`. End of input declines.
///
/// # Errors
///
/// Returns [`CliError::Prompt`] if reading or flushing fails.
pub fn ask(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool, CliError> {
    write!(output, "{prompt} [y/N] ").map_err(CliError::Prompt)?;
    output.flush().map_err(CliError::Prompt)?;
    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(CliError::Prompt)?;
    Ok(read > 0 && is_affirmative(&answer))
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
