//! The consistency filter
//!
//! Everything needed to narrow the answer list: a [`Session`] of scored
//! guesses and the pure [`filter_consistent`] function that keeps only the
//! words still compatible with every guess.

mod consistent;
mod session;

pub use consistent::{filter_consistent, is_consistent};
pub use session::Session;
