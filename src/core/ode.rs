//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// y' = f(y). The integrator calls `ode` once per stage with the stage
/// state `y` and the caller's context `args`, and expects a derivative
/// vector with the same number of components as `y`.
///
/// `A` is an immutable context threaded through every evaluation of a run
/// (model parameters, lookup tables, ...). The fixed-step integrator uses
/// `A = ()`.
///
/// The derivative is returned rather than written into a caller buffer so
/// the integrators can check its length against the state on every
/// evaluation and report [`crate::Error::DimensionMismatch`] instead of
/// panicking on an out-of-bounds index. This costs one allocation per stage.
///
/// Closures of the form `Fn(&[Float], &A) -> Vec<Float>` implement the trait
/// directly.
///
/// # Example
///
/// ```ignore
/// struct VanDerPol;
/// impl ODE<f64> for VanDerPol {
///     fn ode(&self, y: &[f64], eps: &f64) -> Vec<f64> {
///         vec![y[1], ((1.0 - y[0] * y[0]) * y[1] - y[0]) / eps]
///     }
/// }
/// ```
pub trait ODE<A: ?Sized = ()> {
    fn ode(&self, y: &[Float], args: &A) -> Vec<Float>;
}

impl<A, F> ODE<A> for F
where
    A: ?Sized,
    F: Fn(&[Float], &A) -> Vec<Float>,
{
    fn ode(&self, y: &[Float], args: &A) -> Vec<Float> {
        self(y, args)
    }
}
