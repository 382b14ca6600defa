use approx::{assert_abs_diff_eq, assert_relative_eq};
use odeint::{prelude::*, tableau::RK38};

mod common;
use common::{assert_strictly_monotonic, growth, oscillator};

fn rk4(step: f64) -> RungeKutta4<fn(&[f64], &()) -> Vec<f64>> {
    let settings = FixedStepSettings::builder().step(step).build();
    RungeKutta4::new(growth as fn(&[f64], &()) -> Vec<f64>, settings).unwrap()
}

fn final_error(step: f64) -> f64 {
    let traj = rk4(step).integrate(0.0, 1.0, &[1.0]).unwrap();
    let (x, y) = traj.last();
    assert_abs_diff_eq!(x, 1.0, epsilon = 1e-12);
    (y[0] - x.exp()).abs()
}

#[test]
fn unit_steps_reach_the_endpoint_exactly() {
    let traj = rk4(1.0).integrate(0.0, 3.0, &[1.0]).unwrap();
    assert_eq!(traj.x, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(traj.status, Status::Success);
    assert_eq!(traj.naccpt, 3);
    assert_eq!(traj.nfev, 12);

    // One RK4 step of y' = y is the Taylor polynomial of e up to h^4.
    let g: f64 = 1.0 + 1.0 + 1.0 / 2.0 + 1.0 / 6.0 + 1.0 / 24.0;
    for (i, (x, y)) in traj.iter().enumerate() {
        assert_relative_eq!(y[0], g.powi(i as i32), max_relative = 1e-14);
        assert_relative_eq!(y[0], x.exp(), max_relative = 0.05);
    }
}

#[test]
fn global_error_is_fourth_order() {
    let e1 = final_error(0.1);
    let e2 = final_error(0.05);
    assert!(e1 < 1e-5, "error {e1}");

    // Halving h divides the error by about 2^4.
    let ratio = e1 / e2;
    assert!(ratio > 14.0 && ratio < 18.0, "ratio {ratio}");
}

#[test]
fn backward_integration_decreases_x() {
    let traj = rk4(0.1).integrate(1.0, 0.0, &[1.0_f64.exp()]).unwrap();
    assert_strictly_monotonic(&traj.x, -1.0);
    let (x, y) = traj.last();
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y[0], 1.0, epsilon = 1e-5);
}

#[test]
fn step_sign_follows_the_direction_of_integration() {
    let forward = rk4(-0.5).integrate(0.0, 2.0, &[1.0]).unwrap();
    assert_eq!(forward.x, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn overshoot_is_less_than_one_step() {
    let traj = rk4(0.3).integrate(0.0, 1.0, &[1.0]).unwrap();
    assert_strictly_monotonic(&traj.x, 1.0);
    let (x, _) = traj.last();
    assert!(x >= 1.0 && x < 1.3, "x = {x}");
    assert_eq!(traj.len(), 5);
}

#[test]
fn stopping_criterion_ends_the_run_before_the_next_step() {
    let settings = FixedStepSettings::builder().step(0.1).build();
    let rk4 = RungeKutta4::new(growth, settings)
        .unwrap()
        .with_stopping_criterion(|y: &[f64]| y[0] <= 2.0);
    let traj = rk4.integrate(0.0, 5.0, &[1.0]).unwrap();

    assert_eq!(traj.status, Status::Stopped);
    let n = traj.len();
    assert!(traj.y[n - 1][0] > 2.0);
    assert!(traj.y[n - 2][0] <= 2.0);
    // ln 2 ~ 0.69, so the first state above 2 is at x = 0.7.
    assert_abs_diff_eq!(traj.x[n - 1], 0.7, epsilon = 1e-12);
}

#[test]
fn failing_criterion_on_the_initial_state_keeps_only_the_start() {
    let settings = FixedStepSettings::builder().step(0.1).build();
    let rk4 = RungeKutta4::new(growth, settings)
        .unwrap()
        .with_stopping_criterion(|_: &[f64]| false);
    let traj = rk4.integrate(0.0, 1.0, &[1.0]).unwrap();
    assert_eq!(traj.len(), 1);
    assert_eq!(traj.status, Status::Stopped);
}

#[test]
fn nmax_limits_the_number_of_steps() {
    let settings = FixedStepSettings::builder().step(0.1).nmax(5).build();
    let traj = RungeKutta4::new(growth, settings)
        .unwrap()
        .integrate(0.0, 1.0, &[1.0])
        .unwrap();
    assert_eq!(traj.len(), 6);
    assert_eq!(traj.status, Status::NeedLargerNmax);
}

#[test]
fn three_eighths_rule_is_also_fourth_order() {
    let settings = FixedStepSettings::builder().step(0.1).build();
    let rk38 = RungeKutta4::new(growth, settings)
        .unwrap()
        .with_tableau(RK38)
        .unwrap();
    let traj = rk38.integrate(0.0, 1.0, &[1.0]).unwrap();
    let (x, y) = traj.last();
    assert_abs_diff_eq!(y[0], x.exp(), epsilon = 1e-5);
}

#[test]
fn oscillator_returns_after_one_period() {
    let period = 2.0 * std::f64::consts::PI;
    let settings = FixedStepSettings::builder().step(period / 1000.0).build();
    let traj = RungeKutta4::new(oscillator, settings)
        .unwrap()
        .integrate(0.0, period, &[1.0, 0.0])
        .unwrap();
    let (x, y) = traj.last();
    assert_abs_diff_eq!(x, period, epsilon = 1e-9);
    assert_abs_diff_eq!(y[0], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y[1], 0.0, epsilon = 1e-9);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let a = rk4(0.1).integrate(0.0, 2.0, &[1.0]).unwrap();
    let b = rk4(0.1).integrate(0.0, 2.0, &[1.0]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn configuration_errors_are_reported() {
    let zero = FixedStepSettings::builder().step(0.0).build();
    assert_eq!(
        RungeKutta4::new(growth, zero).err(),
        Some(Error::InvalidStepSize(0.0))
    );

    let rk4 = rk4(0.1);
    assert_eq!(rk4.integrate(0.0, 1.0, &[]).unwrap_err(), Error::EmptyState);
    assert!(matches!(
        rk4.integrate(0.0, f64::INFINITY, &[1.0]),
        Err(Error::InvalidBounds(..))
    ));
}

#[test]
fn derivative_of_the_wrong_length_fails_fast() {
    let settings = FixedStepSettings::builder().step(0.1).build();
    let rk4 = RungeKutta4::new(|y: &[f64], _: &()| vec![y[0]; 3], settings).unwrap();
    assert_eq!(
        rk4.integrate(0.0, 1.0, &[1.0, 2.0]).unwrap_err(),
        Error::DimensionMismatch {
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn equal_bounds_return_the_initial_point() {
    let traj = rk4(0.1).integrate(1.0, 1.0, &[1.0]).unwrap();
    assert_eq!(traj.len(), 1);
    assert_eq!(traj.status, Status::Success);
}

#[test]
fn step_below_the_resolution_of_x_is_an_error() {
    let settings = FixedStepSettings::builder().step(1e-7).build();
    let rk4 = RungeKutta4::new(growth, settings).unwrap();
    assert_eq!(
        rk4.integrate(1e10, 1e10 + 1.0, &[1.0]).unwrap_err(),
        Error::StepSizeTooSmall { x: 1e10, h: 1e-7 }
    );
}
