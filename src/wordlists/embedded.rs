//! Embedded word list
//!
//! The answer list compiled into the binary at build time.

// Include the generated word list from the build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
