//! Common test utilities
#![allow(dead_code)]

use eigr::dtype::Complex;
use eigr::matrix::{Column, Matrix};
use rand::Rng;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Max-norm of A·v − λ·v for a real pair
pub fn real_residual(a: &Matrix, lambda: f64, v: &[f64]) -> f64 {
    let av = a.mul_column(&Column::new(v.to_vec())).unwrap();
    av.as_slice()
        .iter()
        .zip(v)
        .map(|(x, y)| (x - lambda * y).abs())
        .fold(0.0, f64::max)
}

/// Max-norm of A·v − λ·v for a complex pair
pub fn complex_residual(a: &Matrix, lambda: Complex, v: &[Complex]) -> f64 {
    (0..a.dim())
        .map(|i| {
            let av: Complex = a.row(i).iter().zip(v).map(|(&aij, &vj)| vj * aij).sum();
            (av - lambda * v[i]).magnitude()
        })
        .fold(0.0, f64::max)
}

/// Sort real values ascending
pub fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// Diagonally dominant random matrix with well separated real eigenvalues
///
/// Diagonal entries are 10, 20, …; off-diagonal noise is drawn from [-1, 1).
pub fn separated_random(n: usize) -> Matrix {
    let mut rng = rand::rng();
    let mut a = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let value = if i == j {
                10.0 * (i + 1) as f64
            } else {
                rng.random_range(-1.0..1.0)
            };
            a.set(i, j, value);
        }
    }
    a
}
