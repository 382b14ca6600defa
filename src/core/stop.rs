//! Stopping predicate consulted by the fixed-step integrator before each step.

use crate::Float;

/// Decides whether integration may take another step from state `y`.
///
/// Returning `false` ends the run before the next step is computed; the
/// trajectory built so far is returned with [`crate::Status::Stopped`].
pub trait StoppingCriterion {
    fn proceed(&self, y: &[Float]) -> bool;
}

/// Default criterion: never stops early.
#[derive(Clone, Copy, Debug, Default)]
pub struct Always;

impl StoppingCriterion for Always {
    fn proceed(&self, _y: &[Float]) -> bool {
        true
    }
}

impl<F> StoppingCriterion for F
where
    F: Fn(&[Float]) -> bool,
{
    fn proceed(&self, y: &[Float]) -> bool {
        self(y)
    }
}
