//! sh-print - A printer for shell script syntax trees
//!
//! This library turns an AST of a POSIX/bash-like script back into
//! source text that parses to the same tree.

pub mod ast;
pub mod printer;

pub use ast::token::*;
pub use ast::types::*;
pub use printer::{fprint, to_string, Node, PrintError, Printer};
