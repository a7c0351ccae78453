//! Residual check for candidate eigenpairs

use crate::algorithm::eigenpair::Eigenpair;
use crate::dtype::Complex;
use crate::matrix::Matrix;
use crate::matrix::parallel::map_cells;

/// Euclidean residual ‖A·v − λ·v‖
///
/// Each component is computed by its own task; the squared magnitudes are
/// summed in index order afterwards.
pub fn residual_norm(a: &Matrix, pair: &Eigenpair) -> f64 {
    let n = a.dim();
    let v = &pair.vector;
    let lambda = pair.value;

    let squares: Vec<f64> = map_cells(n, |i| {
        let mut acc = Complex::ZERO;
        for (&aij, &vj) in a.row(i).iter().zip(v) {
            acc += vj * aij;
        }
        (acc - lambda * v[i]).magnitude_squared()
    });

    squares.iter().sum::<f64>().sqrt()
}

/// Normalize every candidate and accept the set only if all pass
///
/// A candidate whose vector is entirely near zero is rejected before the
/// residual is looked at.
pub fn validate(
    a: &Matrix,
    candidates: &mut [Eigenpair],
    tolerance: f64,
    zero_threshold: f64,
) -> bool {
    candidates.iter_mut().all(|pair| {
        pair.normalize(zero_threshold) && residual_norm(a, pair) <= tolerance
    })
}
