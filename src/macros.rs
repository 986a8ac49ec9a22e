//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$literal` - The decoded literal value, if any
/// * `$line` - The line the token starts on
/// * `$start` - The first column of the token
/// * `$end` - The last column of the token (inclusive)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLit, "42".to_string(), Some(Literal::Int(42)), 1, 1, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
            column_start: $start,
            column_end: $end,
        }
    };
}
