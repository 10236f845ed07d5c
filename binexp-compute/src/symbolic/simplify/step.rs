#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite rule that was applied to an expression during simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a + 0 = a` or `0 + a = a`
    AddZero,

    /// `a * 1 = a` or `1 * a = a`
    MultiplyOne,

    /// `a * 0 = 0` or `0 * a = 0`
    MultiplyZero,

    /// Both operands are integer literals and were replaced by the result of the operation.
    FoldConstants,
}
