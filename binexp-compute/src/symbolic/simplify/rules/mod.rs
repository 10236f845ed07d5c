//! The algebraic rewrite rules applied during simplification.
//!
//! Each rule is a function from an expression to an optionally rewritten expression. A rule
//! returns [`Some`] with the rewritten expression if it applies, or [`None`] if it does not.
//! Rules report the rewrite they performed through the given [`StepCollector`].
//!
//! Rules are tried in a fixed order: identity eliminations first, then constant folding, so
//! `0 + 0` reports [`Step::AddZero`](crate::symbolic::simplify::step::Step::AddZero) rather
//! than a fold.

pub mod add;
pub mod fold;
pub mod multiply;

use binexp_parser::parser::token::op::BinOpKind;
use crate::symbolic::{Expr, StepCollector};
use super::step::Step;

/// Applies the given function to the operands of the expression, if the expression is a binary
/// operation with the given operator.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary { op: expr_op, lhs, rhs } if *expr_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// Tries all rewrite rules on the given expression, returning the rewritten expression from the
/// first rule that applies.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| fold::all(expr, step_collector))
}
