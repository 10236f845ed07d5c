//! Simplifies an expression by applying algebraic rewrite rules until none apply.
//!
//! Simplification works bottom-up: the operands of a binary node are simplified before the node
//! itself, so rules always see fully simplified operands. When a rule rewrites a node, the
//! result is simplified again, since a rewrite can expose further opportunities (for example,
//! folding `1 + 0` inside `x * (1 + 0)` exposes the multiplicative identity).

pub mod rules;
pub mod step;

use super::{Expr, StepCollector};
use step::Step;

/// Simplifies the given expression, returning the simplified result.
///
/// The result is a fixed point of the rewrite rules: applying [`simplify()`] to it again returns
/// an equal expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, reporting each applied rule to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let expr = match expr {
        Expr::Primary(_) => expr.clone(),
        Expr::Binary { op, lhs, rhs } => Expr::Binary {
            op: *op,
            lhs: Box::new(simplify_with(lhs, step_collector)),
            rhs: Box::new(simplify_with(rhs, step_collector)),
        },
    };

    match rules::all(&expr, step_collector) {
        Some(rewritten) => simplify_with(&rewritten, step_collector),
        None => expr,
    }
}

/// Simplifies the given expression, returning the simplified result together with the list of
/// rules that were applied, in order.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps);
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binexp_parser::parser::{ast::Expr as AstExpr, Parser};

    fn parse_expr(input: &str) -> Expr {
        let mut parser = Parser::new(input);
        Expr::from(parser.try_parse_full::<AstExpr>().unwrap())
    }

    /// Parses and simplifies `input`, asserting the result equals the parse of `expected`.
    fn check(input: &str, expected: &str) {
        assert_eq!(simplify(&parse_expr(input)), parse_expr(expected));
    }

    #[test]
    fn additive_identity() {
        check("+ x 0", "x");
        check("+ 0 x", "x");
    }

    #[test]
    fn multiplicative_identity() {
        check("* x 1", "x");
        check("* 1 x", "x");
    }

    #[test]
    fn multiplication_by_zero() {
        check("* x 0", "0");
        check("* 0 x", "0");
    }

    #[test]
    fn constant_folding() {
        check("+ 1 1", "2");
        check("* 2 3", "6");
        check("+ 10 25", "35");
    }

    #[test]
    fn symbol_operand_blocks_folding() {
        check("+ x 1", "+ x 1");
        check("* 2 y", "* 2 y");
    }

    #[test]
    fn leaves_unchanged() {
        check("x", "x");
        check("42", "42");
    }

    #[test]
    fn nested_identities() {
        check("+ + x 0 0", "x");
        check("* 1 * x 1", "x");
    }

    #[test]
    fn fold_exposes_identity() {
        // `1 + 0` folds to `1`, then the multiplicative identity applies
        check("* x + 1 0", "x");
        // `3 * 0` rewrites to `0`, then the additive identity applies
        check("+ x * 3 0", "x");
    }

    #[test]
    fn deep_fold_chain() {
        check("+ 1 + 1 + 1 1", "4");
    }

    #[test]
    fn structure_preserved_under_identity() {
        check("* + x y 1", "+ x y");
    }

    #[test]
    fn zero_with_leading_zeros() {
        check("+ x 00", "x");
    }

    #[test]
    fn idempotent() {
        let simplified = simplify(&parse_expr("+ * x 0 * 2 3"));
        assert_eq!(simplify(&simplified), simplified);
    }

    #[test]
    fn steps_reported_in_order() {
        let (expr, steps) = simplify_with_steps(&parse_expr("+ * x 0 2"));
        assert_eq!(expr, parse_expr("2"));
        assert_eq!(steps, vec![Step::MultiplyZero, Step::AddZero]);
    }

    #[test]
    fn no_steps_when_already_simplified() {
        let (expr, steps) = simplify_with_steps(&parse_expr("+ x y"));
        assert_eq!(expr, parse_expr("+ x y"));
        assert_eq!(steps, vec![]);
    }
}
