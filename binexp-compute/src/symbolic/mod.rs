//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. It's similar to the
//! [`binexp_parser::parser::ast::Expr`] nodes produced by [`binexp_parser`], with the main
//! difference being that [`Expr`] nodes do not carry source spans: rewrites invent nodes that
//! have no source location, and two expressions with the same structure should compare equal no
//! matter where in the source they came from.
//!
//! If you have a [`binexp_parser::parser::ast::Expr`], you can convert it to an [`Expr`] using
//! the [`From`] trait. The conversion is lossy only in that span information is dropped; the
//! tree structure and the literal text of every leaf are preserved exactly.
//!
//! ```
//! use binexp_compute::symbolic::expr::Expr;
//! use binexp_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("+ x 0");
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//!
//! let expr = Expr::from(ast_expr);
//! assert_eq!(expr.as_prefix().to_string(), "+ x 0");
//! ```
//!
//! # Simplification
//!
//! The [`simplify()`] function rewrites an expression into an equivalent form with fewer nodes,
//! by repeatedly applying the algebraic identities in [`simplify::rules`] (additive identity,
//! multiplicative identity, multiplication by zero, and constant folding of literal operands).
//!
//! ```
//! use binexp_compute::symbolic::{expr::{Expr, Primary}, simplify};
//! use binexp_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("* + x 0 1");
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//! let simplified = simplify(&ast_expr.into());
//!
//! // `(x + 0) * 1 = x`
//! assert_eq!(simplified, Expr::Primary(Primary::Symbol("x".to_string())));
//! ```
//!
//! Simplification is total: it never fails on a well-formed tree, and simplifying an already
//! simplified expression returns it unchanged.

pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
