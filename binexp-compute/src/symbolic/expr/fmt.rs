//! Display wrappers that render an expression in the supported output notations.
//!
//! Each wrapper borrows the expression and implements [`Display`](std::fmt::Display), so
//! rendering costs nothing until the value is actually formatted:
//!
//! ```
//! use binexp_compute::symbolic::Expr;
//! use binexp_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("* + 1 2 x");
//! let expr = Expr::from(parser.try_parse_full::<AstExpr>().unwrap());
//!
//! assert_eq!(expr.as_prefix().to_string(), "* + 1 2 x");
//! assert_eq!(expr.as_infix().to_string(), "((1 + 2) * x)");
//! assert_eq!(expr.as_postfix().to_string(), "1 2 + x *");
//! ```

use super::Expr;
use std::fmt::{Display, Formatter};

impl Expr {
    /// Returns a wrapper that renders the expression in prefix notation, the same notation the
    /// parser accepts. Parsing the output reproduces the expression exactly.
    pub fn as_prefix(&self) -> Prefix<'_> {
        Prefix(self)
    }

    /// Returns a wrapper that renders the expression in conventional infix notation. Every
    /// binary operation is parenthesized, so the output is unambiguous without precedence
    /// rules.
    pub fn as_infix(&self) -> Infix<'_> {
        Infix(self)
    }

    /// Returns a wrapper that renders the expression in postfix (reverse Polish) notation.
    pub fn as_postfix(&self) -> Postfix<'_> {
        Postfix(self)
    }

    /// Returns a wrapper that renders the expression as a multi-line tree, indenting each level
    /// by two spaces.
    pub fn as_tree(&self) -> Tree<'_> {
        Tree(self)
    }
}

/// Renders an expression in prefix notation. See [`Expr::as_prefix`].
pub struct Prefix<'a>(&'a Expr);

impl Display for Prefix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expr::Primary(primary) => write!(f, "{}", primary),
            Expr::Binary { op, lhs, rhs } => {
                write!(f, "{} {} {}", op, lhs.as_prefix(), rhs.as_prefix())
            },
        }
    }
}

/// Renders an expression in infix notation. See [`Expr::as_infix`].
pub struct Infix<'a>(&'a Expr);

impl Display for Infix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expr::Primary(primary) => write!(f, "{}", primary),
            Expr::Binary { op, lhs, rhs } => {
                write!(f, "({} {} {})", lhs.as_infix(), op, rhs.as_infix())
            },
        }
    }
}

/// Renders an expression in postfix notation. See [`Expr::as_postfix`].
pub struct Postfix<'a>(&'a Expr);

impl Display for Postfix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expr::Primary(primary) => write!(f, "{}", primary),
            Expr::Binary { op, lhs, rhs } => {
                write!(f, "{} {} {}", lhs.as_postfix(), rhs.as_postfix(), op)
            },
        }
    }
}

/// Renders an expression as an indented multi-line tree. See [`Expr::as_tree`].
pub struct Tree<'a>(&'a Expr);

impl Display for Tree<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_tree(f, self.0, 0)
    }
}

fn fmt_tree(f: &mut Formatter<'_>, expr: &Expr, depth: usize) -> std::fmt::Result {
    write!(f, "{:indent$}", "", indent = depth * 2)?;
    match expr {
        Expr::Primary(primary) => write!(f, "{}", primary),
        Expr::Binary { op, lhs, rhs } => {
            writeln!(f, "{}", op)?;
            fmt_tree(f, lhs, depth + 1)?;
            writeln!(f)?;
            fmt_tree(f, rhs, depth + 1)
        },
    }
}
