//! Constant folding of operations on integer literals.

use binexp_parser::parser::token::op::BinOpKind;
use crate::symbolic::{simplify::step::Step, Expr, StepCollector};

/// Replaces a binary operation whose operands are both integer literals with the result of the
/// operation.
///
/// The result is rendered canonically, so folding `+ 01 02` produces `3`, not `03`.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary { op, lhs, rhs } = expr else {
        return None;
    };
    let (lhs, rhs) = (lhs.as_integer()?, rhs.as_integer()?);

    let folded = match op {
        BinOpKind::Add => Expr::integer(lhs + rhs),
        BinOpKind::Mul => Expr::integer(lhs * rhs),
    };

    step_collector.push(Step::FoldConstants);
    Some(folded)
}

/// Applies all constant folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
}
