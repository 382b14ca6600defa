//! Convenient prelude: import the most commonly used traits and types.
//!
//! ```rust
//! use odeint::prelude::*;
//! ```

pub use crate::{
    AdaptiveSettings, Always, CancellationToken, Error, ErrorTest, FixedStepSettings, Float,
    RungeKutta4, RungeKuttaFehlberg45, Status, Step, StoppingCriterion, Trajectory, ODE,
};
