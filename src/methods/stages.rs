//! Stage evaluation shared by the tableau-driven integrators.

use crate::{Error, Float, ODE};

/// Fill `k` with the scaled stage derivatives of one explicit step:
/// `k_i = h * f(y + Σ_{j<i} a_ij k_j, args)`.
///
/// `yt` is scratch space of the same length as `y`.
pub(crate) fn evaluate<A, F, const S: usize>(
    f: &F,
    a: &[[Float; S]; S],
    y: &[Float],
    h: Float,
    args: &A,
    yt: &mut [Float],
    k: &mut [Vec<Float>],
) -> Result<(), Error>
where
    A: ?Sized,
    F: ODE<A>,
{
    let n = y.len();
    for i in 0..S {
        yt.copy_from_slice(y);
        for j in 0..i {
            let aij = a[i][j];
            if aij != 0.0 {
                for (ytm, kjm) in yt.iter_mut().zip(k[j].iter()) {
                    *ytm += aij * kjm;
                }
            }
        }

        let dydx = f.ode(yt, args);
        if dydx.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: dydx.len(),
            });
        }
        for (kim, d) in k[i].iter_mut().zip(dydx) {
            *kim = h * d;
        }
    }
    Ok(())
}

/// `y + Σ_i b_i k_i`
pub(crate) fn combine<const S: usize>(y: &[Float], b: &[Float; S], k: &[Vec<Float>]) -> Vec<Float> {
    let mut out = y.to_vec();
    for (bi, ki) in b.iter().zip(k.iter()) {
        if *bi != 0.0 {
            for (om, kim) in out.iter_mut().zip(ki.iter()) {
                *om += bi * kim;
            }
        }
    }
    out
}

/// Allocate stage storage for an `n`-dimensional system.
pub(crate) fn workspace<const S: usize>(n: usize) -> (Vec<Float>, Vec<Vec<Float>>) {
    (vec![0.0; n], vec![vec![0.0; n]; S])
}
