//! Butcher tableaux for the explicit Runge-Kutta methods.
//!
//! A tableau is the triple `(a, b, c)`: the stage coupling matrix, the weight
//! vector(s) and the nodes. The integrators only read `a` and the weights;
//! since the systems are autonomous, `c` is kept for documentation and for
//! checking `c_i = Σ_j a_ij`.

use crate::{Error, Float};

/// Tableau of a single explicit Runge-Kutta formula with `S` stages.
#[derive(Clone, Debug, PartialEq)]
pub struct ButcherTableau<const S: usize> {
    /// Strictly lower-triangular stage coupling matrix.
    pub a: [[Float; S]; S],
    /// Weights of the stage derivatives.
    pub b: [Float; S],
    /// Nodes.
    pub c: [Float; S],
}

impl<const S: usize> ButcherTableau<S> {
    /// Stage i only depends on stages j < i.
    pub fn is_explicit(&self) -> bool {
        strictly_lower(&self.a)
    }

    /// The weights sum to one.
    pub fn is_consistent(&self) -> bool {
        sums_to_one(&self.b)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.is_explicit() {
            return Err(Error::InvalidTableau("a must be strictly lower-triangular"));
        }
        if !self.is_consistent() {
            return Err(Error::InvalidTableau("b must sum to 1"));
        }
        Ok(())
    }
}

/// Tableau of an embedded pair: two formulas of adjacent order sharing the
/// same `S` stage evaluations.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedTableau<const S: usize> {
    pub a: [[Float; S]; S],
    /// Weights of the higher-order formula. Only used for the error estimate.
    pub b_high: [Float; S],
    /// Weights of the lower-order formula. This combination is propagated.
    pub b_low: [Float; S],
    pub c: [Float; S],
}

impl<const S: usize> EmbeddedTableau<S> {
    pub fn is_explicit(&self) -> bool {
        strictly_lower(&self.a)
    }

    /// Both weight vectors sum to one.
    pub fn is_consistent(&self) -> bool {
        sums_to_one(&self.b_high) && sums_to_one(&self.b_low)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.is_explicit() {
            return Err(Error::InvalidTableau("a must be strictly lower-triangular"));
        }
        if !self.is_consistent() {
            return Err(Error::InvalidTableau("b_high and b_low must each sum to 1"));
        }
        Ok(())
    }
}

fn strictly_lower<const S: usize>(a: &[[Float; S]; S]) -> bool {
    a.iter()
        .enumerate()
        .all(|(i, row)| row[i..].iter().all(|&v| v == 0.0))
}

fn sums_to_one(b: &[Float]) -> bool {
    let sum: Float = b.iter().sum();
    (sum - 1.0).abs() <= 100.0 * Float::EPSILON
}

/// Classical fourth-order Runge-Kutta.
pub const RK4: ButcherTableau<4> = ButcherTableau {
    a: [
        [0.0, 0.0, 0.0, 0.0],
        [0.5, 0.0, 0.0, 0.0],
        [0.0, 0.5, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ],
    b: [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
    c: [0.0, 0.5, 0.5, 1.0],
};

/// Kutta's 3/8 rule, the other classical fourth-order four-stage method.
pub const RK38: ButcherTableau<4> = ButcherTableau {
    a: [
        [0.0, 0.0, 0.0, 0.0],
        [1.0 / 3.0, 0.0, 0.0, 0.0],
        [-1.0 / 3.0, 1.0, 0.0, 0.0],
        [1.0, -1.0, 1.0, 0.0],
    ],
    b: [1.0 / 8.0, 3.0 / 8.0, 3.0 / 8.0, 1.0 / 8.0],
    c: [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0],
};

/// Fehlberg 4(5) embedded pair.
pub const RKF45: EmbeddedTableau<6> = EmbeddedTableau {
    a: [
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [1.0 / 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [3.0 / 32.0, 9.0 / 32.0, 0.0, 0.0, 0.0, 0.0],
        [1932.0 / 2197.0, -7200.0 / 2197.0, 7296.0 / 2197.0, 0.0, 0.0, 0.0],
        [439.0 / 216.0, -8.0, 3680.0 / 513.0, -845.0 / 4104.0, 0.0, 0.0],
        [-8.0 / 27.0, 2.0, -3544.0 / 2565.0, 1859.0 / 4104.0, -11.0 / 40.0, 0.0],
    ],
    b_high: [
        16.0 / 135.0,
        0.0,
        6656.0 / 12825.0,
        28561.0 / 56430.0,
        -9.0 / 50.0,
        2.0 / 55.0,
    ],
    b_low: [
        25.0 / 216.0,
        0.0,
        1408.0 / 2565.0,
        2197.0 / 4104.0,
        -1.0 / 5.0,
        0.0,
    ],
    c: [0.0, 1.0 / 4.0, 3.0 / 8.0, 12.0 / 13.0, 1.0, 1.0 / 2.0],
};
