use crate::parser::{
    ast::expr::Expr,
    error::Error,
    token::op::BinOp,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operation in prefix notation, such as `+ 1 2`. The operands can themselves be binary
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The operator of the binary expression.
    pub op: BinOp,

    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Binary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<BinOp>()?;
        let lhs = input.try_parse::<Expr>()?;
        let rhs = input.try_parse::<Expr>()?;
        let span = op.span.start..rhs.span().end;

        Ok(Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        })
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.op.kind, self.lhs, self.rhs)
    }
}
