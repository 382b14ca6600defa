//! Explicit fixed-step Runge-Kutta integrators

mod rk4;

pub use rk4::RungeKutta4;
