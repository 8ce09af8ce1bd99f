//! Display functions for filter results

use super::formatters::{colored_guess, word_columns};
use crate::core::Word;
use crate::filter::Session;
use colored::Colorize;

/// How many candidates to print in full before switching to a count-only view
const FULL_LISTING_LIMIT: usize = 120;

const WORDS_PER_ROW: usize = 8;

/// Print the words still consistent with the session
pub fn print_candidates(candidates: &[&Word]) {
    match candidates.len() {
        0 => println!(
            "\n{}",
            "No words remain - check the entered hints.".red().bold()
        ),
        1 => println!(
            "\n{} {}",
            "The answer is".green(),
            candidates[0].text().to_uppercase().bright_green().bold()
        ),
        n if n <= FULL_LISTING_LIMIT => {
            println!(
                "\n{} {}",
                n.to_string().bright_yellow().bold(),
                "possible answers:".bright_white()
            );
            println!("{}", word_columns(candidates, WORDS_PER_ROW));
        }
        n => {
            println!(
                "\n{} {}",
                n.to_string().bright_yellow().bold(),
                "possible answers (first shown):".bright_white()
            );
            println!(
                "{}",
                word_columns(&candidates[..FULL_LISTING_LIMIT], WORDS_PER_ROW)
            );
            println!("{}", format!("... and {} more", n - FULL_LISTING_LIMIT).bright_black());
        }
    }
}

/// Print the session's guesses as colored grid rows
pub fn print_history(session: &Session) {
    if session.is_empty() {
        return;
    }

    println!("\n{}", "Guesses so far:".bright_white());
    for (i, record) in session.records().iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            colored_guess(record),
            record.hints().to_emoji()
        );
    }
}
