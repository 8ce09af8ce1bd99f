//! Wordle Helper - CLI
//!
//! Filters the answer list against accumulated guess feedback, with a TUI,
//! a plain interactive mode, and a scriptable one-shot query mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_helper::{
    commands::{run_query, run_simple},
    core::Word,
    output::print_candidates,
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Filter the Wordle answer list against the hints you've collected",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive helper without TUI)
    Simple,

    /// One-shot query: filter against word:pattern pairs and exit
    Query {
        /// Guesses as word:pattern pairs, e.g. crane:-GG-Y slate:Y----
        #[arg(required = false)]
        guesses: Vec<String>,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_helper::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(ANSWERS)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "No valid words found in '{path}'");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
        Commands::Query { guesses } => {
            let matches = run_query(&guesses, &words).map_err(|e| anyhow::anyhow!(e))?;
            print_candidates(&matches);
            Ok(())
        }
    }
}

fn run_play_command(words: &[Word]) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}
