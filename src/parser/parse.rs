//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the diagnostic types, token-window helpers, and the main parse
//! entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing `let`, `return` and expression statements
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! # Error Recovery
//!
//! Problems never abort the parse.  Each one is recorded as a [`ParseError`]
//! and the offending statement is dropped; the main loop then resumes at the
//! next token.  Callers inspect [`Parser::errors`] once
//! [`Parser::parse_program`] returns.

use log::{debug, trace};
use thiserror::Error;

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
    #[error("no prefix parse function for {0} found")]
    NoPrefixParser(TokenKind),
}

/// A recorded, non-fatal parse diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

/// Recursive descent parser for snow
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) next: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a parser reading from `lexer`, priming the two-token window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let next = lexer.next_token();
        Self {
            lexer,
            current,
            next,
            errors: Vec::new(),
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the entire program (top-level statements)
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                trace!("parsed statement: {stmt}");
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }

    /// Diagnostics recorded so far, in the order they were found
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // ===== Helper methods =====

    pub(crate) fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.next, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn next_is(&self, kind: TokenKind) -> bool {
        self.next.is(kind)
    }

    /// Advance if the lookahead token is `kind`; otherwise record an
    /// unexpected-token diagnostic and stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.next_is(kind) {
            self.advance();
            true
        } else {
            self.error(
                ParseErrorKind::UnexpectedToken {
                    expected: kind,
                    got: self.next.kind,
                },
                self.next.location,
            );
            false
        }
    }

    pub(crate) fn error(&mut self, kind: ParseErrorKind, location: SourceLocation) {
        debug!("{location}: {kind}");
        self.errors.push(ParseError { kind, location });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Expression, Statement};

    #[test]
    fn test_window_is_primed() {
        let parser = Parser::from_source("let x");
        assert_eq!(parser.current.kind, TokenKind::Let);
        assert_eq!(parser.next.kind, TokenKind::Ident);
    }

    #[test]
    fn test_expect_peek_records_error() {
        let mut parser = Parser::from_source("let 5");
        assert!(!parser.expect_peek(TokenKind::Ident));
        assert_eq!(parser.current.kind, TokenKind::Let);
        assert_eq!(
            parser.errors()[0].kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Ident,
                got: TokenKind::Int,
            }
        );
        assert_eq!(parser.errors()[0].location, SourceLocation::new(1, 5));
    }

    #[test]
    fn test_error_messages() {
        let unexpected = ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Assign,
                got: TokenKind::Int,
            },
            location: SourceLocation::new(1, 9),
        };
        assert_eq!(
            unexpected.to_string(),
            "expected next token to be ASSIGN, got INT instead"
        );

        let invalid = ParseErrorKind::InvalidInteger("99999999999999999999".to_string());
        assert_eq!(
            invalid.to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );

        let missing = ParseErrorKind::NoPrefixParser(TokenKind::Illegal);
        assert_eq!(missing.to_string(), "no prefix parse function for ILLEGAL found");
    }

    #[test]
    fn test_parse_program_in_source_order() {
        let mut parser = Parser::from_source("a; b; c;");
        let program = parser.parse_program();

        assert!(parser.errors().is_empty());
        let names: Vec<&str> = program
            .statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Expression(stmt) => match &stmt.expression {
                    Expression::Identifier(ident) => ident.value.as_str(),
                    other => panic!("Expected identifier, got {other:?}"),
                },
                other => panic!("Expected expression statement, got {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
