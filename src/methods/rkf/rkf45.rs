//! Runge-Kutta-Fehlberg 4(5) adaptive-step integrator.

use log::{info, trace, warn};

use crate::{
    methods::{
        settings::{AdaptiveSettings, ErrorTest},
        stages,
        tableau::{EmbeddedTableau, RKF45},
    },
    Error, Float, Status, Trajectory, ODE,
};

use super::controller::StepController;

/// An accepted step returned by [`RungeKuttaFehlberg45::next_step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// `x + h`
    pub x: Float,
    /// Fourth-order solution at `x`.
    pub y: Vec<Float>,
    /// Step size actually taken, after any rejections.
    pub h: Float,
    /// Step size proposed for the next step.
    pub h_next: Float,
    /// Normalized error estimate of the accepted step, `<= 1`.
    pub err: Float,
    /// Trial steps rejected before this one was accepted.
    pub nrejct: usize,
    /// Derivative evaluations spent, rejected trials included.
    pub nfev: usize,
}

/// Adaptive integrator driving the Fehlberg 4(5) embedded pair.
///
/// Each step evaluates the six stages once and forms both the fourth and the
/// fifth order combinations. Their difference, normalized by the step size
/// and the tolerance, decides whether the step is accepted; the fourth order
/// value is the one propagated.
///
/// # Example
///
/// ```ignore
/// let rkf = RungeKuttaFehlberg45::new(
///     |y: &[f64], k: &f64| vec![-k * y[0]],
///     AdaptiveSettings::builder().accuracy_goal(8).build(),
/// )?;
/// let traj = rkf.integrate(0.0, 5.0, &[1.0], 0.1, &0.5)?;
/// ```
#[derive(Clone, Debug)]
pub struct RungeKuttaFehlberg45<F> {
    f: F,
    tableau: EmbeddedTableau<6>,
    controller: StepController,
    atol: Float,
    rtol: Float,
    settings: AdaptiveSettings,
}

impl<F> RungeKuttaFehlberg45<F> {
    pub fn new(f: F, settings: AdaptiveSettings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            f,
            tableau: RKF45,
            controller: StepController::new(settings.safety_factor, settings.hmax),
            atol: settings.atol(),
            rtol: settings.rtol(),
            settings,
        })
    }

    /// Replace the embedded coefficient set.
    pub fn with_tableau(mut self, tableau: EmbeddedTableau<6>) -> Result<Self, Error> {
        tableau.validate()?;
        self.tableau = tableau;
        Ok(self)
    }

    pub fn settings(&self) -> &AdaptiveSettings {
        &self.settings
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    /// Integrate from `x_start` towards `x_end` starting with `initial_step`.
    ///
    /// `initial_step` must be nonzero and point towards `x_end`. `args` is
    /// passed unchanged to every derivative evaluation. The last accepted
    /// step may overshoot `x_end`.
    ///
    /// Cancellation and exhaustion of `nmax` end the run without error; see
    /// [`Trajectory::status`]. A step that cannot be accepted within
    /// `max_rejects` retries, or a non-finite error estimate, is an error.
    pub fn integrate<A>(
        &self,
        x_start: Float,
        x_end: Float,
        y_start: &[Float],
        initial_step: Float,
        args: &A,
    ) -> Result<Trajectory, Error>
    where
        A: ?Sized,
        F: ODE<A>,
    {
        // --- Input Validation ---
        if !x_start.is_finite() || !x_end.is_finite() {
            return Err(Error::InvalidBounds(x_start, x_end));
        }
        if y_start.is_empty() {
            return Err(Error::EmptyState);
        }
        let direction = (x_end - x_start).signum();
        if initial_step == 0.0
            || !initial_step.is_finite()
            || (x_end != x_start && initial_step.signum() != direction)
        {
            return Err(Error::InvalidStepSize(initial_step));
        }

        // --- Declarations ---
        let mut traj = Trajectory::new(x_start, y_start);
        let mut h = initial_step;

        if self.settings.verbose {
            info!(
                "RKF45: integrating from {} to {} with h0 = {}, atol = {:e}",
                x_start, x_end, h, self.atol
            );
        }

        // --- Main integration loop ---
        while (x_end - traj.last().0) * direction > 0.0 {
            if self.cancelled() {
                if self.settings.verbose {
                    info!("Integration stopped.");
                }
                traj.status = Status::Interrupted;
                break;
            }

            if traj.naccpt >= self.settings.nmax {
                warn!(
                    "RKF45: nmax = {} accepted steps taken before reaching x_end",
                    self.settings.nmax
                );
                traj.status = Status::NeedLargerNmax;
                break;
            }

            let (x, y) = traj.last();
            let step = self.next_step(x, y, h, args)?;
            traj.nfev += step.nfev;
            traj.nrejct += step.nrejct;
            h = step.h_next;
            traj.push(step.x, step.y);
        }

        if self.settings.verbose {
            let (x, _) = traj.last();
            info!(
                "RKF45: finished at x = {} after {} accepted and {} rejected steps ({:?})",
                x, traj.naccpt, traj.nrejct, traj.status
            );
        }

        Ok(traj)
    }

    /// Take one accepted step of at most `h` from `(x, y)`.
    ///
    /// Trial steps whose error estimate exceeds one are retried with a
    /// smaller step; nothing is emitted for them.
    pub fn next_step<A>(&self, x: Float, y: &[Float], h: Float, args: &A) -> Result<Step, Error>
    where
        A: ?Sized,
        F: ODE<A>,
    {
        let n = y.len();
        let (mut yt, mut k) = stages::workspace::<6>(n);
        let mut h1 = h;
        let mut nrejct = 0;

        loop {
            stages::evaluate(&self.f, &self.tableau.a, y, h1, args, &mut yt, &mut k)?;
            let y4 = stages::combine(y, &self.tableau.b_low, &k);
            let y5 = stages::combine(y, &self.tableau.b_high, &k);
            let err = self.error_ratio(y, &y4, &y5, h1);

            if !err.is_finite() {
                return Err(Error::NonFiniteError { x, h: h1 });
            }

            if err > 1.0 {
                // Step rejected
                nrejct += 1;
                if nrejct > self.settings.max_rejects {
                    return Err(Error::StepRejectionLimit {
                        x,
                        h: h1,
                        rejects: nrejct,
                    });
                }
                let retry = self.controller.shrink(h1, err);
                trace!(
                    "RKF45: rejected h = {} at x = {} (err = {}), retrying with {}",
                    h1, x, err, retry
                );
                h1 = retry;
                continue;
            }

            // Step accepted
            let x1 = x + h1;
            if x1 == x {
                return Err(Error::StepSizeTooSmall { x, h: h1 });
            }
            return Ok(Step {
                x: x1,
                y: y4,
                h: h1,
                h_next: self.controller.propose(h1, err),
                err,
                nrejct,
                nfev: 6 * (nrejct + 1),
            });
        }
    }

    /// Norm of the embedded difference per unit step, relative to the tolerance.
    fn error_ratio(&self, y: &[Float], y4: &[Float], y5: &[Float], h: Float) -> Float {
        match self.settings.error_test {
            ErrorTest::Absolute => {
                let norm = y4
                    .iter()
                    .zip(y5)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<Float>()
                    .sqrt();
                norm / h.abs() / self.atol
            }
            ErrorTest::Mixed => {
                let norm = y
                    .iter()
                    .zip(y4.iter().zip(y5))
                    .map(|(y0, (a, b))| {
                        let scale = self.atol + self.rtol * y0.abs().max(a.abs());
                        let e = (a - b) / scale;
                        e * e
                    })
                    .sum::<Float>()
                    .sqrt();
                norm / h.abs()
            }
        }
    }

    fn cancelled(&self) -> bool {
        self.settings
            .cancel
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
