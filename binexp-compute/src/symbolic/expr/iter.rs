use super::Expr;

/// An iterator that traverses an expression tree in post-order, visiting the operands of a
/// binary node before the node itself.
pub struct ExprIter<'a> {
    /// The stack of expressions still to be visited.
    stack: Vec<&'a Expr>,

    /// The last expression that was visited.
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator rooted at the given expression.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Marks the given expression as visited and returns it.
    fn visit(&mut self, expr: &'a Expr) -> &'a Expr {
        self.last_visited = Some(expr);
        expr
    }

    /// Returns true if the given expression was the last one visited.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        // pointer comparison: equal subtrees at different positions are distinct nodes
        self.last_visited.map_or(false, |last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Primary(_) => {
                    self.stack.pop();
                    return Some(self.visit(expr));
                },
                Expr::Binary { lhs, rhs, .. } => {
                    if self.is_last_visited(rhs) {
                        self.stack.pop();
                        return Some(self.visit(expr));
                    } else {
                        self.stack.push(rhs);
                        self.stack.push(lhs);
                    }
                },
            }
        }
    }
}
