//! One-shot query mode
//!
//! Scriptable filtering: each argument is a `word:pattern` pair, e.g.
//! `crane:-gg-g`. The filter runs once over the whole session and the
//! matching words are printed.

use crate::core::{GuessRecord, Word};
use crate::filter::{Session, filter_consistent};

/// Parse a `word:pattern` argument into a guess record
///
/// # Errors
/// Returns a message describing the problem: missing `:` separator, a word
/// that is not five ASCII letters, or a pattern that is not five of `G`/`Y`/`-`.
pub fn parse_spec(spec: &str) -> Result<GuessRecord, String> {
    let (word, pattern) = spec
        .split_once(':')
        .ok_or_else(|| format!("Expected 'word:pattern', got '{spec}'"))?;

    GuessRecord::from_parts(word, pattern).map_err(|e| format!("In '{spec}': {e}"))
}

/// Build a session from `word:pattern` arguments and filter the word list
///
/// # Errors
/// Returns the first parse error among the specs; a malformed guess never
/// produces a partial result.
pub fn run_query<'a>(specs: &[String], words: &'a [Word]) -> Result<Vec<&'a Word>, String> {
    let session: Session = specs
        .iter()
        .map(|spec| parse_spec(spec))
        .collect::<Result<_, _>>()?;

    Ok(filter_consistent(&session, words))
}
