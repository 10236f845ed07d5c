//! The span-free expression tree used by the simplification engine.

pub mod fmt;
mod iter;

pub use iter::ExprIter;

use binexp_parser::parser::{ast, token::op::BinOpKind};
use crate::primitive::int_from_str;
use rug::Integer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A leaf of an expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// An integer literal, stored as its verbatim source text.
    ///
    /// The text is guaranteed to consist of decimal digits, but is otherwise unaltered; a
    /// literal written as `007` keeps its leading zeros until a rewrite replaces the node.
    Integer(String),

    /// A symbol, such as `x`.
    Symbol(String),
}

impl std::fmt::Display for Primary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Primary::Integer(value) => write!(f, "{}", value),
            Primary::Symbol(name) => write!(f, "{}", name),
        }
    }
}

/// A mathematical expression with no source span information.
///
/// [`Expr`]s are created from [`ast::Expr`]s via the [`From`] trait, and compare equal whenever
/// their structure is equal, regardless of where in the source they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A leaf node, either an integer literal or a symbol.
    Primary(Primary),

    /// A binary operation applied to two operands.
    Binary {
        /// The operator.
        op: BinOpKind,

        /// The left-hand side operand.
        lhs: Box<Expr>,

        /// The right-hand side operand.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Creates a binary expression from the given operator and operands.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Creates an integer leaf with the canonical rendering of the given value.
    pub fn integer(n: Integer) -> Self {
        Self::Primary(Primary::Integer(n.to_string()))
    }

    /// If this expression is an integer leaf, returns its value.
    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Self::Primary(Primary::Integer(value)) => Some(int_from_str(value)),
            _ => None,
        }
    }

    /// If this expression is a symbol leaf, returns its name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this expression is an integer leaf equal to zero.
    ///
    /// The comparison is numeric, so alternate renderings such as `00` also count.
    pub fn is_integer_zero(&self) -> bool {
        self.as_integer().map_or(false, |n| n.is_zero())
    }

    /// Returns true if this expression is an integer leaf equal to one.
    pub fn is_integer_one(&self) -> bool {
        self.as_integer().map_or(false, |n| n == 1)
    }

    /// Returns an iterator that traverses the expression tree in post-order (operands before
    /// their operator).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

impl From<ast::Expr> for Expr {
    fn from(expr: ast::Expr) -> Self {
        match expr {
            ast::Expr::Literal(literal) => match literal {
                ast::Literal::Integer(int) => Self::Primary(Primary::Integer(int.value)),
                ast::Literal::Symbol(sym) => Self::Primary(Primary::Symbol(sym.name)),
            },
            ast::Expr::Binary(binary) => Self::Binary {
                op: binary.op.kind,
                lhs: Box::new(Self::from(*binary.lhs)),
                rhs: Box::new(Self::from(*binary.rhs)),
            },
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_infix())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binexp_parser::parser::{ast::Expr as AstExpr, Parser};
    use crate::primitive::int;

    fn parse_expr(input: &str) -> Expr {
        let mut parser = Parser::new(input);
        Expr::from(parser.try_parse_full::<AstExpr>().unwrap())
    }

    #[test]
    fn conversion_drops_spans() {
        // same structure parsed from different positions compares equal
        let a = parse_expr("+ 1 x");
        let b = parse_expr("  + 1   x");
        assert_eq!(a, b);
    }

    #[test]
    fn literal_text_preserved() {
        let expr = parse_expr("007");
        assert_eq!(expr, Expr::Primary(Primary::Integer("007".to_string())));
    }

    #[test]
    fn zero_detection_is_numeric() {
        assert!(parse_expr("0").is_integer_zero());
        assert!(parse_expr("00").is_integer_zero());
        assert!(!parse_expr("10").is_integer_zero());
        assert!(!parse_expr("x").is_integer_zero());
    }

    #[test]
    fn one_detection() {
        assert!(parse_expr("1").is_integer_one());
        assert!(parse_expr("01").is_integer_one());
        assert!(!parse_expr("11").is_integer_one());
    }

    #[test]
    fn integer_value() {
        assert_eq!(parse_expr("42").as_integer(), Some(int(42)));
        assert_eq!(parse_expr("x").as_integer(), None);
        assert_eq!(parse_expr("+ 1 2").as_integer(), None);
    }

    #[test]
    fn symbol_name() {
        assert_eq!(parse_expr("foo").as_symbol(), Some("foo"));
        assert_eq!(parse_expr("12").as_symbol(), None);
    }

    #[test]
    fn post_order_visits_operands_first() {
        let expr = parse_expr("* + 1 2 x");
        let visited = expr.post_order_iter()
            .map(|node| node.as_prefix().to_string())
            .collect::<Vec<_>>();

        assert_eq!(visited, vec![
            "1".to_string(),
            "2".to_string(),
            "+ 1 2".to_string(),
            "x".to_string(),
            "* + 1 2 x".to_string(),
        ]);
    }
}
