//! Identity and annihilation rules for multiplication.

use binexp_parser::parser::token::op::BinOpKind;
use crate::primitive::int;
use crate::symbolic::{
    simplify::{rules::do_binary, step::Step},
    Expr,
    StepCollector,
};

/// `a * 1 = a` or `1 * a = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if rhs.is_integer_one() {
            Some(lhs.clone())
        } else if lhs.is_integer_one() {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a * 0 = 0` or `0 * a = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_integer_zero() || rhs.is_integer_zero() {
            Some(Expr::integer(int(0)))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_one(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::symbolic::expr::Primary;

    fn symbol(name: &str) -> Expr {
        Expr::Primary(Primary::Symbol(name.to_string()))
    }

    fn integer(value: &str) -> Expr {
        Expr::Primary(Primary::Integer(value.to_string()))
    }

    #[test]
    fn one_on_either_side() {
        let right = Expr::binary(BinOpKind::Mul, symbol("a"), integer("1"));
        let left = Expr::binary(BinOpKind::Mul, integer("1"), symbol("a"));

        assert_eq!(multiply_one(&right, &mut ()), Some(symbol("a")));
        assert_eq!(multiply_one(&left, &mut ()), Some(symbol("a")));
    }

    #[test]
    fn zero_annihilates() {
        let right = Expr::binary(BinOpKind::Mul, symbol("a"), integer("0"));
        let left = Expr::binary(BinOpKind::Mul, integer("0"), symbol("a"));

        assert_eq!(multiply_zero(&right, &mut ()), Some(integer("0")));
        assert_eq!(multiply_zero(&left, &mut ()), Some(integer("0")));
    }

    #[test]
    fn zero_result_is_canonical() {
        // `a * 00` still collapses, and to the canonical `0`
        let expr = Expr::binary(BinOpKind::Mul, symbol("a"), integer("00"));
        assert_eq!(multiply_zero(&expr, &mut ()), Some(integer("0")));
    }

    #[test]
    fn does_not_apply() {
        let expr = Expr::binary(BinOpKind::Mul, symbol("a"), integer("2"));
        assert_eq!(multiply_one(&expr, &mut ()), None);
        assert_eq!(multiply_zero(&expr, &mut ()), None);
    }
}
