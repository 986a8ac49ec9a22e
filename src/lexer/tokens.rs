use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("bool", TokenKind::Bool);
        map.insert("char", TokenKind::Char);
        map.insert("string", TokenKind::String);
        map.insert("array", TokenKind::Array);
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("loop", TokenKind::Loop);
        map.insert("to", TokenKind::To);
        map.insert("while", TokenKind::While);
        map.insert("print", TokenKind::Print);
        map.insert("input", TokenKind::Input);
        map.insert("fun", TokenKind::Fun);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Data types
    Int,
    Float,
    Bool,
    Char,
    String,
    Array,

    // Reserved
    Var,
    If,
    Else,
    Loop,
    To,
    While,
    Print,
    Input,
    Fun,
    Return,

    LBrace,   // {
    RBrace,   // }
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]

    Semicolon,
    Comma,

    Assign,    // =
    TypeColon, // :

    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    Eq,  // ==
    Neq, // !=
    Lt,
    Le,
    Gt,
    Ge,

    And,
    Or,
    Not,

    Identifier,
    IntLit,
    FloatLit,
    BoolLit,
    CharLit,
    StringLit,

    Newline,
    EOF,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Bool => "BOOL",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Array => "ARRAY",
            TokenKind::Var => "VAR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Loop => "LOOP",
            TokenKind::To => "TO",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Fun => "FUN",
            TokenKind::Return => "RETURN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::TypeColon => "TYPE_COLON",
            TokenKind::Add => "ADD",
            TokenKind::Subtract => "SUBTRACT",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLit => "INT_LIT",
            TokenKind::FloatLit => "FLOAT_LIT",
            TokenKind::BoolLit => "BOOL_LIT",
            TokenKind::CharLit => "CHAR_LIT",
            TokenKind::StringLit => "STRING_LIT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::EOF => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decoded value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i32),
    Float(f32),
    Bool(bool),
    Char(char),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}", value),
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Char(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{}", value),
        }
    }
}

/// A classified lexeme. `column_end` is inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
    pub column_start: usize,
    pub column_end: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = format!(
            "{} '{}' at line: {}, column: {}",
            self.kind, self.lexeme, self.line, self.column_start
        );
        write!(f, "{}", text.replace('\n', "\\n").replace('\0', "\\0"))
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| *kind == self.kind)
    }

    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::IntLit,
            TokenKind::FloatLit,
            TokenKind::BoolLit,
            TokenKind::CharLit,
            TokenKind::StringLit,
        ])
    }
}
