//! Expression parsing implementation
//!
//! Expressions are parsed by precedence climbing (Pratt parsing): the token
//! that starts an expression selects a prefix handler, and the precedence of
//! the lookahead token decides whether the expression continues.
//!
//! # Supported Expressions
//!
//! - Identifiers
//! - Integer literals: decimal, octal with a leading `0`, plus `0x`, `0o` and `0b` forms
//! - Prefix operators: `!`, `-`
//!
//! Binary operators are ranked by [`Precedence::of`] but have no infix
//! handlers yet, so an expression ends before the first operator that would
//! continue it.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use std::num::ParseIntError;

use log::trace;

use crate::parser::ast::*;
use crate::parser::parse::{ParseErrorKind, Parser};
use crate::parser::token::TokenKind;

/// Binding strength, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < > <= >=
    Sum,         // + -
    Product,     // * /
    Prefix,      // !x -x
    Call,        // f(x)
}

impl Precedence {
    /// Precedence of `kind` when it follows a complete operand
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::LessGreater
            }
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

impl Parser {
    /// Parse an expression whose operators bind tighter than `precedence`
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let left = self.parse_prefix()?;

        if !self.next_is(TokenKind::Semicolon) && precedence < Precedence::of(self.next.kind) {
            trace!(
                "{}: no infix handler for {}, expression ends at {}",
                self.next.location,
                self.next.kind,
                left
            );
        }

        Some(left)
    }

    /// Dispatch on the token that starts an expression
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => {
                let ident = Identifier::new(self.current.clone());
                Some(Expression::Identifier(ident))
            }
            TokenKind::Int => Some(self.parse_integer_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            kind => {
                self.error(ParseErrorKind::NoPrefixParser(kind), self.current.location);
                None
            }
        }
    }

    /// Parse integer literal. A literal that does not fit is reported and
    /// kept with value 0.
    fn parse_integer_literal(&mut self) -> Expression {
        let token = self.current.clone();

        let value = match parse_int(&token.literal) {
            Ok(value) => value,
            Err(err) => {
                trace!("integer conversion of {:?} failed: {err}", token.literal);
                self.error(
                    ParseErrorKind::InvalidInteger(token.literal.clone()),
                    token.location,
                );
                0
            }
        };

        Expression::Integer(IntegerLiteral { token, value })
    }

    /// Parse unary operator: !x, -x
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }
}

/// Convert integer text the C way: `0x`, `0o` and `0b` prefixes select a
/// radix, and any other leading `0` means octal.
fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    let lower = text.get(..2).map(str::to_ascii_lowercase);
    let radix = match lower.as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        Some(_) if text.starts_with('0') => return i64::from_str_radix(&text[1..], 8),
        _ => return text.parse(),
    };
    i64::from_str_radix(&text[2..], radix)
}
