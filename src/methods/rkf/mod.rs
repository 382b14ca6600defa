//! Embedded Runge-Kutta-Fehlberg integrators with adaptive step size

mod controller;
mod rkf45;

pub use controller::StepController;
pub use rkf45::{RungeKuttaFehlberg45, Step};
