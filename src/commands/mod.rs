//! Command implementations

pub mod query;
pub mod simple;

pub use query::{parse_spec, run_query};
pub use simple::run_simple;
