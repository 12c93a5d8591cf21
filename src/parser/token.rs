//! Token model shared by the lexer and the parser
//!
//! A [`Token`] pairs a closed [`TokenKind`] with the exact source text it was
//! read from.  Keywords are resolved through a fixed lookup table rather than
//! dedicated lexer branches, so adding a keyword only touches [`KEYWORDS`].

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    Bang,     // !
    Lt,       // <
    Gt,       // >
    LtEq,     // <=
    GtEq,     // >=
    Eq,       // ==
    NotEq,    // !=
    And,      // &&
    Or,       // ||

    // Delimiters
    Comma,
    Semicolon,
    Period,

    // Brackets
    LParen,
    RParen,
    LBrace,
    RBrace,
    LSquare,
    RSquare,

    // Keywords
    Let,
    Function,
    Return,
    If,
    Else,
    True,
    False,
}

impl TokenKind {
    /// Name used when the kind appears in a diagnostic
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Bang => "BANG",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::LtEq => "LT_EQ",
            TokenKind::GtEq => "GT_EQ",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Period => "PERIOD",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LSquare => "LSQUARE",
            TokenKind::RSquare => "RSQUARE",
            TokenKind::Let => "LET",
            TokenKind::Function => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words of the language
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut keywords = FxHashMap::default();
    keywords.insert("let", TokenKind::Let);
    keywords.insert("fn", TokenKind::Function);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("if", TokenKind::If);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("true", TokenKind::True);
    keywords.insert("false", TokenKind::False);
    keywords
});

/// Classify identifier-shaped text as a keyword or a plain identifier.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

/// A single classified unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// End-of-file marker; its literal is always empty.
    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenKind::Eof, "", location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of file"),
            kind => write!(f, "{} '{}'", kind, self.literal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("if"), TokenKind::If);
        assert_eq!(lookup_ident("else"), TokenKind::Else);
        assert_eq!(lookup_ident("true"), TokenKind::True);
        assert_eq!(lookup_ident("false"), TokenKind::False);
    }

    #[test]
    fn test_non_keywords_are_identifiers() {
        assert_eq!(lookup_ident("letter"), TokenKind::Ident);
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
        assert_eq!(lookup_ident("function"), TokenKind::Ident);
        assert_eq!(lookup_ident("_"), TokenKind::Ident);
    }

    #[test]
    fn test_display() {
        let loc = SourceLocation::new(1, 1);
        assert_eq!(Token::new(TokenKind::Ident, "foo", loc).to_string(), "IDENT 'foo'");
        assert_eq!(Token::eof(loc).to_string(), "end of file");
        assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
    }
}
