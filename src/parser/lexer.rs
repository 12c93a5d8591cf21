//! Lexer (tokenizer) for snow source code
//!
//! Converts raw source text into [`Token`]s on demand: every call to
//! [`Lexer::next_token`] yields exactly one token.  The lexer never fails;
//! characters it does not understand come back as [`TokenKind::Illegal`] so
//! the parser can report them.

use super::token::{lookup_ident, SourceLocation, Token, TokenKind};

/// Lexer for snow source code
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the remaining input, ending with a single EOF token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Read the next token. Returns EOF forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Token::eof(loc);
        };

        let single = |kind| Token::new(kind, ch, loc);

        match ch {
            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),

            // Integer literals
            '0'..='9' => self.number_literal(ch, loc),

            // Operators that may pair with the following character
            '=' => self.pair_or(ch, '=', TokenKind::Eq, TokenKind::Assign, loc),
            '!' => self.pair_or(ch, '=', TokenKind::NotEq, TokenKind::Bang, loc),
            '<' => self.pair_or(ch, '=', TokenKind::LtEq, TokenKind::Lt, loc),
            '>' => self.pair_or(ch, '=', TokenKind::GtEq, TokenKind::Gt, loc),
            '&' => self.pair_or(ch, '&', TokenKind::And, TokenKind::Illegal, loc),
            '|' => self.pair_or(ch, '|', TokenKind::Or, TokenKind::Illegal, loc),

            '+' => single(TokenKind::Plus),
            '-' => single(TokenKind::Minus),
            '*' => single(TokenKind::Asterisk),
            '/' => single(TokenKind::Slash),
            ',' => single(TokenKind::Comma),
            ';' => single(TokenKind::Semicolon),
            '.' => single(TokenKind::Period),
            '(' => single(TokenKind::LParen),
            ')' => single(TokenKind::RParen),
            '{' => single(TokenKind::LBrace),
            '}' => single(TokenKind::RBrace),
            '[' => single(TokenKind::LSquare),
            ']' => single(TokenKind::RSquare),

            _ => single(TokenKind::Illegal),
        }
    }

    /// Emit `paired` if the next character is `second`, otherwise `fallback`
    /// for the lone first character.
    fn pair_or(
        &mut self,
        first: char,
        second: char,
        paired: TokenKind,
        fallback: TokenKind,
        loc: SourceLocation,
    ) -> Token {
        if self.peek() == Some(second) {
            self.advance();
            Token::new(paired, format!("{first}{second}"), loc)
        } else {
            Token::new(fallback, first, loc)
        }
    }

    /// Read a run of ASCII digits (no sign, fraction or exponent)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut digits = String::new();
        digits.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Int, digits, loc)
    }

    /// Read a run of ASCII letters and underscores
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(lookup_ident(&ident), ident, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Yields every token before end of input.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}
