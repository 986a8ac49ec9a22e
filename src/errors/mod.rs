//! Error types and error handling for the lexer.
//!
//! This module defines the fatal errors a scan can end with. It includes:
//!
//! - Error structures with source position information
//! - One variant per kind of lexical failure
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
