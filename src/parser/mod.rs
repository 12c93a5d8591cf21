//! snow source code parser
//!
//! This module transforms snow source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across `statements` and `expressions`
//! - [`ast`]: AST node definitions
//!
//! # Supported Grammar
//!
//! - Statements: `let` bindings, `return`, expression statements
//! - Expressions: identifiers, integer literals, prefix `!` and `-`
//! - Statement terminators (`;`) are optional after expressions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for expressions.
//! No external parser generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
pub mod token;
