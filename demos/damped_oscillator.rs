//! # Example: Damped Oscillator
//!
//! x'' + 2 zeta omega x' + omega^2 x = 0 written as a first-order system.
//! The physical parameters are passed through the `args` context, and the
//! fixed-step run stops early once the amplitude has decayed.

use odeint::prelude::*;

struct Oscillator {
    omega: f64,
    zeta: f64,
}

struct DampedOscillator;

impl ODE<Oscillator> for DampedOscillator {
    fn ode(&self, y: &[f64], p: &Oscillator) -> Vec<f64> {
        vec![y[1], -2.0 * p.zeta * p.omega * y[1] - p.omega * p.omega * y[0]]
    }
}

fn main() -> Result<(), Error> {
    let params = Oscillator {
        omega: 2.0,
        zeta: 0.1,
    };

    let settings = AdaptiveSettings::builder()
        .accuracy_goal(8)
        .hmax(0.25)
        .build();
    let rkf = RungeKuttaFehlberg45::new(DampedOscillator, settings)?;
    let traj = rkf.integrate(0.0, 20.0, &[1.0, 0.0], 0.01, &params)?;

    println!("RKF45: {:?} after {} accepted / {} rejected steps", traj.status, traj.naccpt, traj.nrejct);
    for (x, y) in traj.iter().step_by(10) {
        println!("t = {:>8.4}, x = {:>10.6}, v = {:>10.6}", x, y[0], y[1]);
    }

    // The fixed-step method has no args; capture the parameters instead.
    let f = |y: &[f64], _: &()| DampedOscillator.ode(y, &params);
    let settings = FixedStepSettings::builder().step(0.05).build();
    let rk4 = RungeKutta4::new(f, settings)?
        .with_stopping_criterion(|y: &[f64]| y[0].hypot(y[1]) > 0.05);
    let traj = rk4.integrate(0.0, 100.0, &[1.0, 0.0])?;

    let (t, y) = traj.last();
    println!();
    println!("RK4: {:?} at t = {:.2} with x = {:.5}, v = {:.5}", traj.status, t, y[0], y[1]);

    Ok(())
}
