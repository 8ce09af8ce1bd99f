//! Core domain types for the Wordle helper
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, immutable once constructed, and testable in isolation.

mod guess;
mod hint;
mod word;

pub use guess::{GuessError, GuessRecord};
pub use hint::{Hint, Hints};
pub use word::{WORD_LEN, Word, WordError};
