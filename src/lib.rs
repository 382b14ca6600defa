//! Numerical integrators for initial value problems of ordinary differential equations.
//!
//! Two methods are provided:
//! - [`RungeKutta4`]: classical fixed-step fourth-order Runge-Kutta.
//! - [`RungeKuttaFehlberg45`]: embedded Runge-Kutta-Fehlberg 4(5) pair with
//!   adaptive step-size control.
//!
//! Both drive a Butcher tableau (see [`tableau`]) and return the full
//! [`Trajectory`] of accepted steps.

mod core;
mod error;
mod methods;

pub mod prelude;

pub use crate::core::{
    cancel::CancellationToken,
    ode::ODE,
    status::Status,
    stop::{Always, StoppingCriterion},
    trajectory::{Trajectory, TrajectoryIter},
};
pub use error::Error;
pub use methods::{
    rk::RungeKutta4,
    rkf::{RungeKuttaFehlberg45, Step, StepController},
    settings::{AdaptiveSettings, ErrorTest, FixedStepSettings},
    tableau,
};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Floating point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
