//! Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use log::{info, warn};

use crate::{
    methods::{
        settings::FixedStepSettings,
        stages,
        tableau::{ButcherTableau, RK4},
    },
    Always, Error, Float, Status, StoppingCriterion, Trajectory, ODE,
};

/// Remaining distance below which x_end counts as reached, as a fraction of |h|.
const ENDPOINT_SLACK: Float = 0.01;

/// Fixed-step four-stage Runge-Kutta integrator.
///
/// Defaults to the classical [`RK4`] tableau; any explicit, consistent
/// four-stage tableau can be supplied with [`RungeKutta4::with_tableau`].
///
/// # Example
///
/// ```ignore
/// let settings = FixedStepSettings::builder().step(0.1).build();
/// let rk4 = RungeKutta4::new(|y: &[f64], _: &()| vec![y[0]], settings)?;
/// let traj = rk4.integrate(0.0, 1.0, &[1.0])?;
/// ```
#[derive(Clone, Debug)]
pub struct RungeKutta4<F, S = Always> {
    f: F,
    stopping_criterion: S,
    tableau: ButcherTableau<4>,
    settings: FixedStepSettings,
}

impl<F> RungeKutta4<F, Always>
where
    F: ODE,
{
    pub fn new(f: F, settings: FixedStepSettings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            f,
            stopping_criterion: Always,
            tableau: RK4,
            settings,
        })
    }
}

impl<F, S> RungeKutta4<F, S>
where
    F: ODE,
    S: StoppingCriterion,
{
    /// Replace the stopping criterion evaluated before every step.
    pub fn with_stopping_criterion<T>(self, stopping_criterion: T) -> RungeKutta4<F, T>
    where
        T: StoppingCriterion,
    {
        RungeKutta4 {
            f: self.f,
            stopping_criterion,
            tableau: self.tableau,
            settings: self.settings,
        }
    }

    /// Replace the coefficient set.
    pub fn with_tableau(mut self, tableau: ButcherTableau<4>) -> Result<Self, Error> {
        tableau.validate()?;
        self.tableau = tableau;
        Ok(self)
    }

    pub fn settings(&self) -> &FixedStepSettings {
        &self.settings
    }

    /// Integrate from `x_start` towards `x_end` with constant step.
    ///
    /// The step magnitude is `settings.step` and its sign follows
    /// `x_end - x_start`. Steps are taken until x_end is reached, possibly
    /// overshooting by less than one step when the interval is not a multiple
    /// of the step. The run ends early, without error, when the stopping
    /// criterion rejects the current state, when cancellation is requested or
    /// when `nmax` steps have been taken; see [`Trajectory::status`].
    pub fn integrate(
        &self,
        x_start: Float,
        x_end: Float,
        y_start: &[Float],
    ) -> Result<Trajectory, Error> {
        // --- Input Validation ---
        if !x_start.is_finite() || !x_end.is_finite() {
            return Err(Error::InvalidBounds(x_start, x_end));
        }
        if y_start.is_empty() {
            return Err(Error::EmptyState);
        }

        // --- Declarations ---
        let n = y_start.len();
        let direction = (x_end - x_start).signum();
        let h = self.settings.step.abs() * direction;
        let (mut yt, mut k) = stages::workspace::<4>(n);
        let mut traj = Trajectory::new(x_start, y_start);
        let mut nstep = 0usize;

        if self.settings.verbose {
            info!("RK4: integrating from {} to {} with h = {}", x_start, x_end, h);
        }

        // --- Main integration loop ---
        while (x_end - traj.last().0) * direction > ENDPOINT_SLACK * h.abs() {
            if self.cancelled() {
                if self.settings.verbose {
                    info!("Integration stopped.");
                }
                traj.status = Status::Interrupted;
                break;
            }

            if !self.stopping_criterion.proceed(traj.last().1) {
                traj.status = Status::Stopped;
                break;
            }

            if nstep >= self.settings.nmax {
                warn!("RK4: nmax = {} steps taken before reaching x_end", self.settings.nmax);
                traj.status = Status::NeedLargerNmax;
                break;
            }

            let (x, y) = traj.last();
            // Computed from the start point so the abscissae do not drift.
            let x_next = x_start + (nstep + 1) as Float * h;
            if x_next == x {
                return Err(Error::StepSizeTooSmall { x, h });
            }

            let y_next = self.step(y, h, &mut yt, &mut k)?;
            traj.nfev += 4;
            nstep += 1;
            traj.push(x_next, y_next);
        }

        if self.settings.verbose {
            let (x, _) = traj.last();
            info!("RK4: finished at x = {} after {} steps ({:?})", x, traj.naccpt, traj.status);
        }

        Ok(traj)
    }

    /// Advance `y` by one step of size `h` and return `(x + h, y_next)`.
    pub fn next_step(&self, x: Float, y: &[Float], h: Float) -> Result<(Float, Vec<Float>), Error> {
        let (mut yt, mut k) = stages::workspace::<4>(y.len());
        let y_next = self.step(y, h, &mut yt, &mut k)?;
        Ok((x + h, y_next))
    }

    fn step(
        &self,
        y: &[Float],
        h: Float,
        yt: &mut [Float],
        k: &mut [Vec<Float>],
    ) -> Result<Vec<Float>, Error> {
        stages::evaluate(&self.f, &self.tableau.a, y, h, &(), yt, k)?;
        Ok(stages::combine(y, &self.tableau.b, k))
    }

    fn cancelled(&self) -> bool {
        self.settings
            .cancel
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
