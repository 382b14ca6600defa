//! # Example: Exponential Growth
//!
//! Solve dy/dx = y, y(0) = 1 on [0, 1] with both integrators and compare
//! against the exact solution e^x.

use odeint::prelude::*;

fn growth(y: &[f64], _: &()) -> Vec<f64> {
    vec![y[0]]
}

fn main() -> Result<(), Error> {
    let settings = FixedStepSettings::builder().step(0.1).build();
    let rk4 = RungeKutta4::new(growth, settings)?;
    let traj = rk4.integrate(0.0, 1.0, &[1.0])?;

    println!("RK4 (h = 0.1): {:?}, {} steps", traj.status, traj.naccpt);
    for (x, y) in &traj {
        println!("x = {:.4}, y = {:.10}, error = {:.3e}", x, y[0], (y[0] - x.exp()).abs());
    }

    let rkf = RungeKuttaFehlberg45::new(growth, AdaptiveSettings::default())?;
    let traj = rkf.integrate(0.0, 1.0, &[1.0], 0.1, &())?;

    println!();
    println!("RKF45 (atol = 1e-10): {:?}", traj.status);
    println!("Number of function evaluations: {}", traj.nfev);
    println!("Number of accepted steps: {}", traj.naccpt);
    println!("Number of rejected steps: {}", traj.nrejct);
    let (x, y) = traj.last();
    println!("Final state: x = {:.5}, y = {:.12}, error = {:.3e}", x, y[0], (y[0] - x.exp()).abs());

    Ok(())
}
