//! Printer module for shell ASTs
//!
//! This module turns a parsed tree back into shell source text.

pub mod types;
pub mod printer;

// Re-exports
pub use types::{Node, PrintError};
pub use printer::{fprint, to_string, Printer};
