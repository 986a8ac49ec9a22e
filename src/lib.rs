#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::lexer::lexer::tokenize;

/// Line/column of a source location, both 1-based, with the file label it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: usize, column: usize, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches(|c: char| c == '\n' || c == '\r'))
}


/// Renders `error` against the source it was raised for.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> main.lang
          |
        2 | var y = 3abc;
          | --------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
