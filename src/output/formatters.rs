//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Hint, WORD_LEN, Word};
use colored::Colorize;

/// Render a scored guess as colored uppercase letters
///
/// Greens on a green background, yellows on yellow, grays dimmed - the
/// terminal equivalent of a Wordle grid row.
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    let mut row = String::new();
    for i in 0..WORD_LEN {
        let letter = (record.word().char_at(i) as char)
            .to_ascii_uppercase()
            .to_string();
        let cell = match record.hints().at(i) {
            Hint::Correct => format!(" {letter} ").black().on_green().to_string(),
            Hint::Present => format!(" {letter} ").black().on_yellow().to_string(),
            Hint::Absent => format!(" {letter} ").white().on_bright_black().to_string(),
        };
        row.push_str(&cell);
    }
    row
}

/// Arrange words into fixed-width columns
///
/// Returns one string with newlines between rows; empty input yields an
/// empty string.
#[must_use]
pub fn word_columns(words: &[&Word], per_row: usize) -> String {
    let per_row = per_row.max(1);
    words
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|w| w.text().to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
