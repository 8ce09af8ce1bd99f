//! Simple interactive CLI mode
//!
//! Text-based interactive helper without TUI

use crate::core::{GuessRecord, Word};
use crate::filter::{Session, filter_consistent};
use crate::output::{print_candidates, print_history};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Helper - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess you made together with the feedback it received,");
    println!("as 'WORD PATTERN', e.g. 'crane -GG-Y'. Pattern characters:\n");
    println!("  - G/g/🟩 for green (correct position)");
    println!("  - Y/y/🟨 for yellow (wrong position)");
    println!("  - -/_/⬜ for gray (not in word)\n");
    println!("Commands: 'quit' to exit, 'new' for a new puzzle, 'undo' to drop the last guess\n");

    let mut session = Session::new();

    loop {
        let input = get_user_input("Guess and pattern")?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Good luck with the puzzle!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.clear();
                println!("\n🔄 New puzzle started!\n");
                continue;
            }
            "undo" | "u" => {
                if let Some(dropped) = session.undo() {
                    println!("✓ Dropped '{}'\n", dropped.word().text());
                } else {
                    println!("Nothing to undo!\n");
                    continue;
                }
            }
            _ => {
                let mut parts = input.split_whitespace();
                let (Some(word), Some(pattern), None) = (parts.next(), parts.next(), parts.next())
                else {
                    println!("❌ Expected 'WORD PATTERN', e.g. 'crane -GG-Y'\n");
                    continue;
                };

                match GuessRecord::from_parts(word, pattern) {
                    Ok(record) => {
                        let solved = record.is_solved();
                        session.push(record);
                        if solved {
                            println!("\n🎉 Solved in {} guesses!\n", session.len());
                            session.clear();
                            continue;
                        }
                    }
                    Err(e) => {
                        println!("❌ {e}\n");
                        continue;
                    }
                }
            }
        }

        print_history(&session);
        print_candidates(&filter_consistent(&session, words));
        println!();
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
