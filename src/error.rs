//! Errors for integration methods

use thiserror::Error;

use crate::Float;

/// Configuration and numerical failures reported by the integrators.
///
/// Cancellation and early termination are not errors; they are reported
/// through [`crate::Status`] on the returned trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("step size h must be nonzero, finite and point toward x_end (got {0})")]
    InvalidStepSize(Float),
    #[error("integration bounds must be finite (got x_start = {0}, x_end = {1})")]
    InvalidBounds(Float, Float),
    #[error("initial state y_start must not be empty")]
    EmptyState,
    #[error("absolute tolerance must be positive and finite (accuracy_goal = {goal} gives atol = {atol})")]
    NonPositiveTolerance { goal: i32, atol: Float },
    #[error("relative tolerance must be non-negative and finite (precision_goal = {goal} gives rtol = {rtol})")]
    InvalidRelativeTolerance { goal: i32, rtol: Float },
    #[error("safety_factor must be in (0, 1] (got {0})")]
    SafetyFactorOutOfRange(Float),
    #[error("hmax must be nonzero and not NaN (got {0})")]
    InvalidMaxStep(Float),
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),
    #[error("max_rejects must be positive (got {0})")]
    MaxRejectsMustBePositive(usize),
    #[error("invalid tableau: {0}")]
    InvalidTableau(&'static str),
    #[error("derivative has {found} components but the state has {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("non-finite error estimate at x = {x} with h = {h}")]
    NonFiniteError { x: Float, h: Float },
    #[error("step size h = {h} does not advance x = {x}")]
    StepSizeTooSmall { x: Float, h: Float },
    #[error("step rejected {rejects} times at x = {x} (last trial h = {h})")]
    StepRejectionLimit { x: Float, h: Float, rejects: usize },
}
