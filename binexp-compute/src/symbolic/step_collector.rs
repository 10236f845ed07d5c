//! Collects the rewrite steps applied during simplification.

/// A type that collects the steps applied while rewriting an expression.
///
/// The unit type implements this trait by discarding every step, for callers that only want the
/// final expression. [`Vec`] records every step in order.
pub trait StepCollector<S> {
    /// Collects a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
