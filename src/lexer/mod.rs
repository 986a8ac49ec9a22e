//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with a line/column aware cursor
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod cursor;
pub mod lexer;
pub mod tokens;
