//! A parser for prefix-notation binary expressions.
//!
//! In prefix notation the operator is written before its operands, so `+ 1 2` denotes the sum of
//! `1` and `2`, and `* + 1 2 x` denotes `(1 + 2) * x`. Every operator takes exactly two operands,
//! which makes the notation unambiguous without parentheses or precedence rules.
//!
//! The [`tokenizer`] module splits source text into [`Token`](tokenizer::Token)s, and the
//! [`parser`] module assembles those tokens into an abstract syntax tree rooted at an
//! [`Expr`](parser::ast::Expr):
//!
//! ```
//! use binexp_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("* + 1 2 x");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..9);
//! ```
//!
//! Parsing is the only fallible stage; see [`parser::error`] for the error kinds it can produce.

pub mod parser;
pub mod tokenizer;
