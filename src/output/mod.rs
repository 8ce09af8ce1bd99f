//! Terminal output formatting
//!
//! Display utilities for candidate lists and scored guesses.

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_history};
