//! Abstract Syntax Tree (AST) Types for shell scripts
//!
//! This module defines the tree the printer consumes, together with the
//! literal spellings of every keyword and operator it emits.
//!
//! Architecture:
//!   Input → Lexer → Parser → AST → Printer → Output

pub mod token;
pub mod types;
