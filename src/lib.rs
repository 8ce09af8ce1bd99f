//! Wordle Helper
//!
//! Filters a fixed dictionary of five-letter words against the feedback
//! accumulated from prior guesses, returning every word still consistent with
//! all hints so far - including the duplicate-letter edge cases most ad-hoc
//! filters get wrong.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::GuessRecord;
//! use wordle_helper::filter::{Session, filter_consistent};
//! use wordle_helper::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "slate", "trace", "grape"]);
//!
//! let mut session = Session::new();
//! session.push(GuessRecord::from_parts("crane", "YGG-G").unwrap());
//!
//! let remaining = filter_consistent(&session, &words);
//! assert_eq!(remaining.len(), 1);
//! assert_eq!(remaining[0].text(), "trace");
//! ```

// Core domain types
pub mod core;

// The consistency filter
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
