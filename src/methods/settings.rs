//! Settings for numerical integrators

use bon::Builder;

use crate::{CancellationToken, Error, Float};

/// Settings for the fixed-step integrator.
///
/// ```ignore
/// let settings = FixedStepSettings::builder().step(0.1).verbose(true).build();
/// ```
#[derive(Builder, Clone, Debug)]
pub struct FixedStepSettings {
    /// Step magnitude. The sign is taken from the direction of integration.
    pub step: Float,
    /// Emit `info` level diagnostics through the `log` facade.
    #[builder(default = false)]
    pub verbose: bool,
    /// Maximum number of steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
    /// Checked at the top of every step.
    pub cancel: Option<CancellationToken>,
}

impl FixedStepSettings {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.step == 0.0 || !self.step.is_finite() {
            return Err(Error::InvalidStepSize(self.step));
        }
        if self.nmax == 0 {
            return Err(Error::NMaxMustBePositive(self.nmax));
        }
        Ok(())
    }
}

/// Local error test used by the adaptive controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorTest {
    /// `‖y4 - y5‖ / |h| / atol`. Ignores `precision_goal`.
    #[default]
    Absolute,
    /// Per-component scale `atol + rtol * max(|y_i|, |y4_i|)`, then
    /// `‖(y4 - y5) / scale‖ / |h|`.
    Mixed,
}

/// Settings for the adaptive Runge-Kutta-Fehlberg integrator.
#[derive(Builder, Clone, Debug)]
pub struct AdaptiveSettings {
    /// `atol = 10^(-accuracy_goal)`.
    #[builder(default = 10)]
    pub accuracy_goal: i32,
    /// `rtol = 10^(-precision_goal)`. Only read by [`ErrorTest::Mixed`].
    #[builder(default = 0)]
    pub precision_goal: i32,
    /// Safety factor in step-size prediction, in (0, 1].
    #[builder(default = 0.84)]
    pub safety_factor: Float,
    /// Signed step bound: a ceiling when positive, a floor when negative.
    #[builder(default = 1e16)]
    pub hmax: Float,
    #[builder(default)]
    pub error_test: ErrorTest,
    /// Maximum number of consecutive rejections of a single step.
    #[builder(default = 100)]
    pub max_rejects: usize,
    /// Maximum number of accepted steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
    #[builder(default = false)]
    pub verbose: bool,
    pub cancel: Option<CancellationToken>,
}

impl Default for AdaptiveSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AdaptiveSettings {
    pub fn atol(&self) -> Float {
        (10.0 as Float).powf(-(self.accuracy_goal as Float))
    }

    pub fn rtol(&self) -> Float {
        (10.0 as Float).powf(-(self.precision_goal as Float))
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        let atol = self.atol();
        if !(atol > 0.0 && atol.is_finite()) {
            return Err(Error::NonPositiveTolerance {
                goal: self.accuracy_goal,
                atol,
            });
        }
        let rtol = self.rtol();
        if !(rtol >= 0.0 && rtol.is_finite()) {
            return Err(Error::InvalidRelativeTolerance {
                goal: self.precision_goal,
                rtol,
            });
        }
        if !(self.safety_factor > 0.0 && self.safety_factor <= 1.0) {
            return Err(Error::SafetyFactorOutOfRange(self.safety_factor));
        }
        if self.hmax == 0.0 || self.hmax.is_nan() {
            return Err(Error::InvalidMaxStep(self.hmax));
        }
        if self.max_rejects == 0 {
            return Err(Error::MaxRejectsMustBePositive(self.max_rejects));
        }
        if self.nmax == 0 {
            return Err(Error::NMaxMustBePositive(self.nmax));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_defaults() {
        let s = AdaptiveSettings::default();
        assert_eq!(s.accuracy_goal, 10);
        assert_eq!(s.precision_goal, 0);
        assert_eq!(s.safety_factor, 0.84);
        assert_eq!(s.hmax, 1e16);
        assert_eq!(s.error_test, ErrorTest::Absolute);
        assert!(!s.verbose);
        assert!(s.cancel.is_none());
        assert!((s.atol() - 1e-10).abs() < 1e-24);
        assert_eq!(s.rtol(), 1.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn degenerate_accuracy_goal_is_rejected() {
        let s = AdaptiveSettings::builder().accuracy_goal(400).build();
        assert!(matches!(
            s.validate(),
            Err(Error::NonPositiveTolerance { goal: 400, .. })
        ));
    }

    #[test]
    fn safety_factor_must_be_in_unit_interval() {
        for sf in [0.0, -0.5, 1.5, Float::NAN] {
            let s = AdaptiveSettings::builder().safety_factor(sf).build();
            assert!(matches!(s.validate(), Err(Error::SafetyFactorOutOfRange(_))));
        }
        let s = AdaptiveSettings::builder().safety_factor(1.0).build();
        assert!(s.validate().is_ok());
    }

    #[test]
    fn zero_hmax_is_rejected() {
        let s = AdaptiveSettings::builder().hmax(0.0).build();
        assert_eq!(s.validate(), Err(Error::InvalidMaxStep(0.0)));
    }

    #[test]
    fn fixed_step_must_be_nonzero_and_finite() {
        for step in [0.0, Float::INFINITY, Float::NAN] {
            let s = FixedStepSettings::builder().step(step).build();
            assert!(matches!(s.validate(), Err(Error::InvalidStepSize(_))));
        }
        let s = FixedStepSettings::builder().step(-0.1).build();
        assert!(s.validate().is_ok());
    }
}
