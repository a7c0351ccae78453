//! Closed-form eigenvalue estimators over the iterate window
//!
//! The window holds two consecutive iterates. With `u` the normalized
//! iterate, `Au = v` and `A²u = v_next · scale`, where `scale` is the
//! max-norm that normalized `v` into the next iterate.
//!
//! Each estimator returns `None` when its assumptions do not hold for the
//! current window. That is not an error: the driver simply moves on.

use crate::algorithm::eigenpair::Eigenpair;
use crate::dtype::Complex;
use crate::matrix::Column;

/// One step of the power sequence: `u` (max-norm 1) and `v = A·u`
#[derive(Clone, Debug)]
pub struct Iterate {
    /// Normalized iterate
    pub u: Column,
    /// Image under A
    pub v: Column,
    /// Max-norm of the previous `v` that produced this `u`
    pub scale: f64,
}

/// Index of the largest-magnitude entry; ratios are taken there
fn pivot(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, x) in values.iter().enumerate() {
        if x.abs() > values[best].abs() {
            best = i;
        }
    }
    best
}

/// Single dominant real eigenvalue: λ = v_p / u_p
///
/// The eigenvector is the later iterate `v`, or `u` when `v` has vanished
/// (λ = 0).
pub fn real_candidate(cur: &Iterate, zero_threshold: f64) -> Option<Eigenpair> {
    let u = cur.u.as_slice();
    let v = cur.v.as_slice();
    let p = pivot(u);
    if u[p] == 0.0 {
        return None;
    }
    let lambda = v[p] / u[p];
    let vector = if cur.v.max_norm() > zero_threshold { v } else { u };
    Some(Eigenpair::real(lambda, vector))
}

/// Dominant pair ±λ: λ² = (A²u)_p / u_p, eigenvectors `Au ± λu`
pub fn opposite_candidates(cur: &Iterate, next: &Iterate) -> Option<[Eigenpair; 2]> {
    let u = cur.u.as_slice();
    let v = cur.v.as_slice();
    let p = pivot(u);
    if u[p] == 0.0 {
        return None;
    }

    let lambda_sq = next.v[p] * next.scale / u[p];
    if lambda_sq <= 0.0 || !lambda_sq.is_finite() {
        return None;
    }
    let lambda = lambda_sq.sqrt();

    let plus: Vec<f64> = v.iter().zip(u).map(|(vi, ui)| vi + lambda * ui).collect();
    let minus: Vec<f64> = v.iter().zip(u).map(|(vi, ui)| vi - lambda * ui).collect();

    Some([
        Eigenpair::real(lambda, &plus),
        Eigenpair::real(-lambda, &minus),
    ])
}

/// Dominant conjugate pair r·e^{±iθ}
///
/// On the invariant plane of the pair, `A²u = 2r·cosθ·Au − r²·u`. The two
/// coefficients are fitted in the least-squares sense over all components of
/// `u, Au, A²u`. The eigenvector for λ is `Au − λ̄·u` and vice versa.
pub fn complex_candidates(cur: &Iterate, next: &Iterate) -> Option<[Eigenpair; 2]> {
    let x0 = cur.u.as_slice();
    let x1 = cur.v.as_slice();
    let x2: Vec<f64> = next.v.as_slice().iter().map(|w| w * next.scale).collect();

    let dot = |a: &[f64], b: &[f64]| a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>();
    let g11 = dot(x1, x1);
    let g10 = dot(x1, x0);
    let g00 = dot(x0, x0);
    let b1 = dot(x1, &x2);
    let b0 = dot(x0, &x2);

    // Gram determinant vanishes when Au is parallel to u
    let det = g11 * g00 - g10 * g10;
    if det <= f64::EPSILON * g11 * g00 {
        return None;
    }

    // x2 ≈ trace·x1 − modulus_sq·x0
    let trace = (b1 * g00 - b0 * g10) / det;
    let modulus_sq = -(g11 * b0 - g10 * b1) / det;
    if modulus_sq <= 0.0 || !modulus_sq.is_finite() {
        return None;
    }

    let r = modulus_sq.sqrt();
    let cos_theta = trace / (2.0 * r);
    if cos_theta.abs() > 1.0 || cos_theta.is_nan() {
        return None;
    }
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let lambda = Complex::new(r * cos_theta, r * sin_theta);
    let lambda_bar = lambda.conj();

    let combine = |shift: Complex| -> Vec<Complex> {
        x1.iter()
            .zip(x0)
            .map(|(&a, &b)| Complex::real(a) - shift * b)
            .collect()
    };

    Some([
        Eigenpair::new(lambda, combine(lambda_bar)),
        Eigenpair::new(lambda_bar, combine(lambda)),
    ])
}
