use crate::parser::{
    ast::{binary::Binary, literal::Literal},
    error::Error,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an expression in prefix notation.
///
/// Every operator is binary: an operator token is always followed by exactly two complete
/// operand subtrees, so a well-formed expression is either a single literal, or an operator
/// whose operands are themselves well-formed expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal operand.
    Literal(Literal),

    /// A binary operation, such as `+ 1 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.try_parse::<Literal>() {
            Ok(literal) => Ok(Self::Literal(literal)),
            Err(_) => input.try_parse::<Binary>().map(Self::Binary),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
