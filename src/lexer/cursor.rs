//! Character cursor over a source buffer.
//!
//! Tracks the scanning offset along with the 1-based line and column, and a
//! checkpoint taken at the start of every token so the lexer can slice the
//! lexeme and stamp its start coordinates.

pub const NUL: char = '\0';

#[derive(Debug, Clone)]
pub struct Cursor {
    source: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    start_pos: usize,
    start_line: usize,
    start_column: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        Cursor {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            start_pos: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.source.len()
    }

    /// Consumes the current character.
    ///
    /// A newline moves to the next line only after it has been consumed, so
    /// the newline itself belongs to the line it ends.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end of the buffer.
    pub fn advance(&mut self) -> char {
        let c = self.source[self.pos];
        self.pos += 1;
        self.column += 1;

        if c == '\n' {
            self.column = 1;
            self.line += 1;
        }

        c
    }

    pub fn peek(&self) -> char {
        self.source.get(self.pos).copied().unwrap_or(NUL)
    }

    pub fn peek_next(&self) -> char {
        self.source.get(self.pos + 1).copied().unwrap_or(NUL)
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }

        self.advance();
        true
    }

    pub fn begin_token(&mut self) {
        self.start_pos = self.pos;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn start_pos(&self) -> usize {
        self.start_pos
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn start_column(&self) -> usize {
        self.start_column
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    /// Text from the checkpoint to the current position.
    pub fn lexeme(&self) -> String {
        self.slice(self.start_pos, self.pos)
    }

    /// Like `lexeme`, but clipped to the buffer so it is safe while reporting errors.
    pub fn near(&self) -> String {
        let end = self.pos.min(self.source.len());
        let start = self.start_pos.min(end);
        self.slice(start, end)
    }
}
