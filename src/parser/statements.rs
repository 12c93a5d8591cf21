//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= let_stmt | return_stmt | expr_stmt
//! let_stmt    ::= "let" IDENT "=" expression [";"]
//! return_stmt ::= "return" [expression] [";"]
//! expr_stmt   ::= expression [";"]
//! ```
//!
//! Every method leaves the parser on the last token of its statement; the
//! main loop in [`Parser::parse_program`] steps past it.  A method returning
//! `None` has already recorded a diagnostic.

use log::debug;

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse let binding: let name = value;
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_to_terminator();

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    /// Parse return statement: return value; or a bare return;
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if self.next_is(TokenKind::Semicolon) || self.next_is(TokenKind::Eof) {
            self.skip_to_terminator();
            return Some(Statement::Return(ReturnStatement { token, value: None }));
        }
        self.advance();

        let value = Some(self.parse_expression(Precedence::Lowest)?);
        self.skip_to_terminator();

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    /// Parse a bare expression; the trailing ';' is optional
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.next_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    /// Move onto the statement's ';', skipping whatever the expression
    /// parser left behind. Stops short of EOF.
    fn skip_to_terminator(&mut self) {
        if !self.next_is(TokenKind::Semicolon) && !self.next_is(TokenKind::Eof) {
            debug!(
                "{}: skipping unparsed tokens from {} to end of statement",
                self.next.location, self.next
            );
        }

        while !self.next_is(TokenKind::Semicolon) && !self.next_is(TokenKind::Eof) {
            self.advance();
        }

        if self.next_is(TokenKind::Semicolon) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::ParseErrorKind;

    fn parse(source: &str) -> (Program, Parser) {
        let mut parser = Parser::from_source(source);
        let program = parser.parse_program();
        (program, parser)
    }

    #[test]
    fn test_let_statements() {
        let (program, parser) = parse("\nlet foo = 6;\nlet bar = 9;\nlet foobar = 69;\n  ");

        assert!(parser.errors().is_empty(), "{:?}", parser.errors());
        assert_eq!(program.statements.len(), 3);

        for (stmt, expected) in program.statements.iter().zip(["foo", "bar", "foobar"]) {
            assert_eq!(stmt.token_literal(), "let");
            match stmt {
                Statement::Let(LetStatement { name, .. }) => {
                    assert_eq!(name.value, expected);
                    assert_eq!(name.token.literal, expected);
                }
                _ => panic!("Expected let statement, got {stmt:?}"),
            }
        }
    }

    #[test]
    fn test_let_value_is_attached() {
        let (program, parser) = parse("let x = -y;");

        assert!(parser.errors().is_empty());
        match &program.statements[0] {
            Statement::Let(stmt) => {
                assert_eq!(stmt.value.to_string(), "(-y)");
            }
            other => panic!("Expected let statement, got {other:?}"),
        }
        assert_eq!(program.to_string(), "let x = (-y);");
    }

    #[test]
    fn test_return_statements() {
        let (program, parser) = parse("\nreturn 6;\nreturn 9;\nreturn 6 * 9;\n  ");

        assert!(parser.errors().is_empty(), "{:?}", parser.errors());
        assert_eq!(program.statements.len(), 3);

        let values: Vec<i64> = program
            .statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Return(ReturnStatement {
                    value: Some(Expression::Integer(lit)),
                    token,
                }) => {
                    assert_eq!(token.literal, "return");
                    lit.value
                }
                _ => panic!("Expected return of an integer, got {stmt:?}"),
            })
            .collect();
        assert_eq!(values, vec![6, 9, 6]);
    }

    #[test]
    fn test_bare_return() {
        let (program, parser) = parse("return;\nreturn 1;");

        assert!(parser.errors().is_empty(), "{:?}", parser.errors());
        assert_eq!(program.statements.len(), 2);
        assert!(matches!(
            &program.statements[0],
            Statement::Return(ReturnStatement { value: None, token }) if token.literal == "return"
        ));
        assert!(matches!(
            &program.statements[1],
            Statement::Return(ReturnStatement { value: Some(_), .. })
        ));
        assert_eq!(program.to_string(), "return;return 1;");
    }

    #[test]
    fn test_missing_assign_recovers() {
        let (program, parser) = parse("let foo 6;\nlet bar = 9;");

        assert_eq!(parser.errors().len(), 1);
        assert_eq!(
            parser.errors()[0].to_string(),
            "expected next token to be ASSIGN, got INT instead"
        );
        assert!(program.statements.iter().any(|stmt| matches!(
            stmt,
            Statement::Let(LetStatement { name, .. }) if name.value == "bar"
        )));
    }

    #[test]
    fn test_missing_identifier() {
        let (_, parser) = parse("let = 5;");

        assert_eq!(
            parser.errors()[0].kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Ident,
                got: TokenKind::Assign,
            }
        );
    }

    #[test]
    fn test_optional_semicolon() {
        let (program, parser) = parse("x\ny;");

        assert!(parser.errors().is_empty());
        assert_eq!(program.statements.len(), 2);
        assert!(program
            .statements
            .iter()
            .all(|stmt| matches!(stmt, Statement::Expression(_))));
    }

    #[test]
    fn test_truncated_input_terminates() {
        for source in ["let", "let x", "let x =", "return", "-", "let x = 5"] {
            let (_, parser) = parse(source);
            if source == "let x = 5" || source == "return" {
                assert!(parser.errors().is_empty(), "{source}");
            } else {
                assert!(!parser.errors().is_empty(), "{source}");
            }
        }
    }
}
