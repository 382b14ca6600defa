#![allow(dead_code)]

use odeint::Float;

/// y' = y
pub fn growth(y: &[Float], _: &()) -> Vec<Float> {
    vec![y[0]]
}

/// y' = -k y, with the rate passed through `args`.
pub fn decay(y: &[Float], k: &Float) -> Vec<Float> {
    vec![-k * y[0]]
}

/// Simple harmonic oscillator: y0' = y1, y1' = -y0.
pub fn oscillator(y: &[Float], _: &()) -> Vec<Float> {
    vec![y[1], -y[0]]
}

/// Abscissae strictly increase (`direction > 0`) or decrease (`direction < 0`).
pub fn assert_strictly_monotonic(x: &[Float], direction: Float) {
    for w in x.windows(2) {
        assert!((w[1] - w[0]) * direction > 0.0, "not monotonic: {} -> {}", w[0], w[1]);
    }
}
