use std::rc::Rc;

use log::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::{
    cursor::{Cursor, NUL},
    tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP},
};

/// Single-use scanner: `scan_tokens` consumes it.
pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            cursor: Cursor::new(source),
            tokens: vec![],
            file: file_name,
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>, Error> {
        while !self.cursor.is_at_end() {
            self.cursor.begin_token();

            if let Err(error) = self.scan_token() {
                debug!("scan of {} aborted: {}", self.file, error);
                return Err(error);
            }
        }

        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.push(MK_TOKEN!(TokenKind::EOF, NUL.to_string(), None, line, column, column));

        debug!("scanned {} tokens from {}", self.tokens.len(), self.file);
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), Error> {
        let c = self.cursor.advance();

        match c {
            '{' => self.add(TokenKind::LBrace),
            '}' => self.add(TokenKind::RBrace),
            '(' => self.add(TokenKind::LParen),
            ')' => self.add(TokenKind::RParen),
            '[' => self.add(TokenKind::LBracket),
            ']' => self.add(TokenKind::RBracket),
            ';' => self.add(TokenKind::Semicolon),
            ',' => self.add(TokenKind::Comma),
            ':' => self.add(TokenKind::TypeColon),
            '+' => self.add(TokenKind::Add),
            '-' => self.add(TokenKind::Subtract),
            '*' => self.add(TokenKind::Multiply),
            '/' => self.add(TokenKind::Divide),
            '%' => self.add(TokenKind::Modulo),
            '=' => {
                let kind = if self.cursor.match_char('=') { TokenKind::Eq } else { TokenKind::Assign };
                self.add(kind)
            }
            '<' => {
                let kind = if self.cursor.match_char('=') { TokenKind::Le } else { TokenKind::Lt };
                self.add(kind)
            }
            '>' => {
                let kind = if self.cursor.match_char('=') { TokenKind::Ge } else { TokenKind::Gt };
                self.add(kind)
            }
            '!' => {
                if !self.cursor.match_char('=') {
                    return Err(self.error(ErrorImpl::UnexpectedCharacter { character: c }));
                }
                self.add(TokenKind::Neq)
            }
            '"' => self.string_literal()?,
            '\'' => self.char_literal()?,

            ' ' | '\r' | '\t' | '\n' => {}

            c if c.is_ascii_digit() => self.number()?,
            c if is_ident_start(c) => self.identifier(),
            _ => return Err(self.error(ErrorImpl::UnexpectedCharacter { character: c })),
        }

        Ok(())
    }

    fn number(&mut self) -> Result<(), Error> {
        let mut is_float = false;

        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }

        // A trailing '.' without a digit after it is left for the next token.
        if self.cursor.peek() == '.' && self.cursor.peek_next().is_ascii_digit() {
            is_float = true;
            self.cursor.advance();

            while self.cursor.peek().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.lexeme();

        if self.cursor.peek().is_alphabetic() {
            return Err(self.error(ErrorImpl::MalformedNumericLiteral { text }));
        }

        let literal = if is_float {
            text.parse::<f32>().map(Literal::Float).ok()
        } else {
            text.parse::<i32>().map(Literal::Int).ok()
        };

        match literal {
            Some(literal) => {
                let kind = if is_float { TokenKind::FloatLit } else { TokenKind::IntLit };
                self.add_literal(kind, literal);
                Ok(())
            }
            None => Err(self.error(ErrorImpl::NumberParseError { token: text })),
        }
    }

    fn string_literal(&mut self) -> Result<(), Error> {
        while self.cursor.peek() != '"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return Err(self.error(ErrorImpl::UnterminatedString));
        }

        self.cursor.advance();

        let value = self.cursor.slice(self.cursor.start_pos() + 1, self.cursor.pos() - 1);
        self.add_literal(TokenKind::StringLit, Literal::String(value));
        Ok(())
    }

    fn char_literal(&mut self) -> Result<(), Error> {
        if self.cursor.is_at_end() || self.cursor.peek_next() == NUL {
            return Err(self.error(ErrorImpl::UnterminatedChar));
        }

        let value = self.cursor.advance();
        if self.cursor.peek() != '\'' {
            return Err(self.error(ErrorImpl::UnterminatedChar));
        }
        self.cursor.advance();

        self.add_literal(TokenKind::CharLit, Literal::Char(value));
        Ok(())
    }

    fn identifier(&mut self) {
        while is_ident_part(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = self.cursor.lexeme();

        let kind = match text.as_str() {
            "true" | "false" => {
                self.add_literal(TokenKind::BoolLit, Literal::Bool(text == "true"));
                return;
            }
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            _ => RESERVED_LOOKUP.get(text.as_str()).copied().unwrap_or(TokenKind::Identifier),
        };

        self.add(kind);
    }

    fn add(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = MK_TOKEN!(
            kind,
            self.cursor.lexeme(),
            literal,
            self.cursor.start_line(),
            self.cursor.start_column(),
            self.cursor.column() - 1
        );
        self.push(token);
    }

    fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(
            error_impl,
            Position::new(self.cursor.start_line(), self.cursor.start_column(), Rc::clone(&self.file)),
            self.cursor.near(),
        )
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(&source, file).scan_tokens()
}
