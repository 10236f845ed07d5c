//! Identity rules for addition.

use binexp_parser::parser::token::op::BinOpKind;
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    Expr,
    StepCollector,
};

/// `a + 0 = a` or `0 + a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if rhs.is_integer_zero() {
            Some(lhs.clone())
        } else if lhs.is_integer_zero() {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
}
