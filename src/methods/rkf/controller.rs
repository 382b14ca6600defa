//! Step-size rules of the Fehlberg controller.

use crate::Float;

/// Exponent of the error ratio in the step-size prediction: the local error
/// of the fifth-order estimate scales with h^5.
const ERROR_EXPONENT: Float = -0.2;
/// Largest shrink applied to a rejected trial step.
const SHRINK_LIMIT: Float = 0.1;
/// Largest growth applied to a rejected trial step.
const GROW_LIMIT: Float = 4.0;
/// Growth of the next step when the error estimate vanishes.
const ZERO_ERROR_GROWTH: Float = 2.0;

/// h_new = safety * h * err^(-1/5), bounded by the signed `hmax`.
///
/// `hmax > 0` is a ceiling on the proposed step (forward integration),
/// `hmax < 0` a floor (backward integration).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepController {
    pub safety: Float,
    pub hmax: Float,
}

impl StepController {
    pub fn new(safety: Float, hmax: Float) -> Self {
        Self { safety, hmax }
    }

    /// Retry size for a trial step of size `h` rejected with `err > 1`.
    pub fn shrink(&self, h: Float, err: Float) -> Float {
        let delta = self.safety * err.powf(ERROR_EXPONENT);
        if delta <= SHRINK_LIMIT {
            h * SHRINK_LIMIT
        } else if delta >= GROW_LIMIT {
            h * GROW_LIMIT
        } else {
            h * delta
        }
    }

    /// Size proposed for the step following an accepted step `h` with `err <= 1`.
    ///
    /// A zero error estimate doubles the step; repeated zero estimates keep
    /// doubling until `hmax` takes over.
    pub fn propose(&self, h: Float, err: Float) -> Float {
        let h2 = if err == 0.0 {
            ZERO_ERROR_GROWTH * h
        } else {
            h * self.safety * err.powf(ERROR_EXPONENT)
        };
        self.bound(h2)
    }

    fn bound(&self, h: Float) -> Float {
        if self.hmax > 0.0 {
            self.hmax.min(h)
        } else {
            self.hmax.max(h)
        }
    }
}
