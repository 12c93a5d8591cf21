//! # Introduction
//!
//! snow is a small programming language.  This crate is its front end: it
//! turns source text into a syntax tree and collects diagnostics along the
//! way.  Nothing here evaluates code.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ diagnostics)
//! ```
//!
//! 1. [`parser::lexer`]: pull-based tokenizer, one [`parser::token::Token`] per call.
//! 2. [`parser::parse`]: two-token lookahead parser producing a
//!    [`parser::ast::Program`].
//! 3. [`parser::ast`]: closed statement and expression types; every node
//!    re-serializes itself through `Display`.
//!
//! ## Example
//!
//! ```
//! use snow::parser::parse::Parser;
//!
//! let mut parser = Parser::from_source("let x = -5;");
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (-5);");
//! ```

pub mod parser;
