use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Texte de l'invite interactive.
pub const PROMPT: &str = "Enter the message to be displayed on the board: ";

/// Ask for the message on `output` and read one line from `input`.
///
/// The trailing newline is stripped; an empty answer is allowed and gives a
/// board showing only its background.
///
/// # Errors
/// Returns an error if writing the prompt or reading the answer fails.
pub fn read_message(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|()| output.flush())
        .context("Impossible d'écrire l'invite")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Impossible de lire le message")?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
