//! Interactive TUI interface
//!
//! The presentation layer: collects (word, hints) rows from the user and
//! displays the filtered candidate list. No filtering logic lives here.

mod app;
mod rendering;

pub use app::{App, run_tui};
