//! Accumulated result of an integration run.

use crate::{Float, Status};

/// Discretized solution `{(x_i, y_i)}` plus run statistics.
///
/// The first entry is always the initial point; every further entry is an
/// accepted step, so `len() == naccpt + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Abscissae of the accepted points, monotonic in the direction of integration.
    pub x: Vec<Float>,
    /// State at each abscissa.
    pub y: Vec<Vec<Float>>,
    /// Number of derivative evaluations.
    pub nfev: usize,
    /// Number of accepted steps.
    pub naccpt: usize,
    /// Number of rejected trial steps.
    pub nrejct: usize,
    pub status: Status,
}

impl Trajectory {
    pub(crate) fn new(x0: Float, y0: &[Float]) -> Self {
        Self {
            x: vec![x0],
            y: vec![y0.to_vec()],
            nfev: 0,
            naccpt: 0,
            nrejct: 0,
            status: Status::Success,
        }
    }

    /// Append an accepted step.
    pub(crate) fn push(&mut self, x: Float, y: Vec<Float>) {
        self.x.push(x);
        self.y.push(y);
        self.naccpt += 1;
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: a trajectory holds at least its initial point.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Latest accepted point.
    pub fn last(&self) -> (Float, &[Float]) {
        let i = self.x.len() - 1;
        (self.x[i], &self.y[i])
    }

    /// Iterate over stored points `(x_i, y_i)`.
    pub fn iter(&self) -> TrajectoryIter<'_> {
        TrajectoryIter {
            x_iter: self.x.iter(),
            y_iter: self.y.iter(),
        }
    }

    /// Split into the parallel `(x, y)` sequences.
    pub fn into_parts(self) -> (Vec<Float>, Vec<Vec<Float>>) {
        (self.x, self.y)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = (Float, &'a [Float]);
    type IntoIter = TrajectoryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(x, y)` pairs of a [`Trajectory`].
pub struct TrajectoryIter<'a> {
    x_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Vec<Float>>,
}

impl<'a> Iterator for TrajectoryIter<'a> {
    type Item = (Float, &'a [Float]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.x_iter.next(), self.y_iter.next()) {
            (Some(&x), Some(y)) => Some((x, y.as_slice())),
            _ => None,
        }
    }
}
