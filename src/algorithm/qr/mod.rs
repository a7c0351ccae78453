//! Unshifted QR algorithm with Givens rotations
//!
//! # Algorithm
//!
//! 1. Reduce A to upper Hessenberg form H = Zᵀ·A·Z by plane rotations.
//! 2. Repeat sweeps of adjacent-row rotations, H ← Gᵀ·H·G, until the
//!    diagonal splits into converged blocks: 1×1 blocks carry real
//!    eigenvalues, isolated 2×2 blocks carry complex conjugate pairs.
//! 3. Read the eigenvalues off the blocks. Eigenvectors for real
//!    eigenvalues come either from the Schur vectors or from
//!    back-substitution on the quasi-triangular matrix (see
//!    [`EigenvectorMode`]).
//!
//! Convergence is checked before every sweep, so an already quasi-triangular
//! input takes zero sweeps. The loop is bounded by [`QrOptions::max_sweeps`].

pub mod givens;
pub mod schur;

use crate::dtype::Complex;
use crate::error::{Error, Result};
use crate::matrix::{Column, Matrix};
use givens::hessenberg;
use log::{debug, trace};
use schur::{Block, back_substitute, converged_blocks, current_blocks, pair_eigenvalues, sweep};

/// How eigenvectors of real eigenvalues are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EigenvectorMode {
    /// Column of the accumulated transform at the eigenvalue's index
    ///
    /// Exact for normal matrices; for other inputs it is a Schur vector.
    #[default]
    SchurColumns,
    /// Solve (T − λI)·y = 0 on the quasi-triangular form, then map y through
    /// the transform
    BackSubstitution,
}

/// Options for [`qr_algorithm`]
#[derive(Debug, Clone, Copy)]
pub struct QrOptions {
    /// Subdiagonal entries at or below this are treated as zero (default: 1e-10)
    pub zero_threshold: f64,

    /// Maximum number of sweeps (default: 100_000)
    pub max_sweeps: usize,

    /// Eigenvector recovery (default: `SchurColumns`)
    pub eigenvectors: EigenvectorMode,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            zero_threshold: 1e-10,
            max_sweeps: 100_000,
            eigenvectors: EigenvectorMode::SchurColumns,
        }
    }
}

/// Result of [`qr_algorithm`]
#[derive(Debug, Clone)]
pub struct QrResult {
    /// Eigenvalues in diagonal order; a 2×2 block contributes `λ`, then `λ̄`
    pub eigenvalues: Vec<Complex>,
    /// Unit-length eigenvector per eigenvalue, `None` for complex ones
    pub eigenvectors: Vec<Option<Vec<f64>>>,
    /// Quasi-triangular matrix T
    pub schur: Matrix,
    /// Orthogonal Z with Zᵀ·A·Z = T
    pub transform: Matrix,
    /// Sweeps performed
    pub sweeps: usize,
    /// False when `max_sweeps` ran out before the blocks converged
    pub converged: bool,
}

/// Eigenvalues and real eigenvectors of `a`
///
/// The input is cloned; the caller's matrix is never modified. Running out
/// of sweeps is not an error: the result reports `converged = false` and
/// eigenvalues read from the current diagonal blocks.
///
/// # Example
///
/// ```
/// use eigr::algorithm::qr::{QrOptions, qr_algorithm};
/// use eigr::matrix::Matrix;
///
/// let a = Matrix::from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]])?;
/// let result = qr_algorithm(&a, &QrOptions::default())?;
/// assert!(result.converged);
/// assert_eq!(result.eigenvalues[0].im, 1.0);
/// # Ok::<(), eigr::error::Error>(())
/// ```
pub fn qr_algorithm(a: &Matrix, options: &QrOptions) -> Result<QrResult> {
    let n = a.dim();
    if n == 0 {
        return Err(Error::invalid_argument("a", "matrix must not be empty"));
    }
    if options.zero_threshold.is_nan() || options.zero_threshold < 0.0 {
        return Err(Error::invalid_argument(
            "zero_threshold",
            format!("must be non-negative, got {}", options.zero_threshold),
        ));
    }

    let threshold = options.zero_threshold;
    let mut t = a.clone();
    let mut z = Matrix::identity(n);
    hessenberg(&mut t, &mut z);

    let mut sweeps = 0;
    let blocks = loop {
        if let Some(blocks) = converged_blocks(&t, threshold) {
            break Some(blocks);
        }
        if sweeps == options.max_sweeps {
            break None;
        }
        sweep(&mut t, &mut z, threshold);
        sweeps += 1;
        trace!("qr sweep {sweeps}");
    };

    let converged = blocks.is_some();
    if converged {
        debug!("qr converged after {sweeps} sweeps");
    } else {
        debug!("qr stopped after {sweeps} sweeps without converging");
    }
    let blocks = blocks.unwrap_or_else(|| current_blocks(&t, threshold));

    let mut eigenvalues = Vec::with_capacity(n);
    let mut eigenvectors = Vec::with_capacity(n);
    for block in &blocks {
        match *block {
            Block::Single(i) => {
                eigenvalues.push(Complex::real(t.get(i, i)));
                eigenvectors.push(Some(real_eigenvector(
                    &t,
                    &z,
                    &blocks,
                    i,
                    options.eigenvectors,
                )?));
            }
            Block::Pair(i) => {
                eigenvalues.extend(pair_eigenvalues(&t, i));
                eigenvectors.extend([None, None]);
            }
        }
    }

    Ok(QrResult {
        eigenvalues,
        eigenvectors,
        schur: t,
        transform: z,
        sweeps,
        converged,
    })
}

fn real_eigenvector(
    t: &Matrix,
    z: &Matrix,
    blocks: &[Block],
    index: usize,
    mode: EigenvectorMode,
) -> Result<Vec<f64>> {
    match mode {
        EigenvectorMode::SchurColumns => Ok(z.column(index)),
        EigenvectorMode::BackSubstitution => {
            let y = back_substitute(t, blocks, index);
            Ok(z.mul_column(&Column::new(y))?.into_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(a: &Matrix, lambda: f64, v: &[f64]) -> f64 {
        let av = a.mul_column(&Column::new(v.to_vec())).unwrap();
        av.as_slice()
            .iter()
            .zip(v)
            .map(|(x, y)| (x - lambda * y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_identity_takes_no_sweeps() {
        let result = qr_algorithm(&Matrix::identity(4), &QrOptions::default()).unwrap();
        assert!(result.converged);
        assert_eq!(result.sweeps, 0);
        assert_eq!(result.eigenvalues, vec![Complex::ONE; 4]);
        assert_eq!(result.eigenvectors[2], Some(vec![0.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_rotation_is_one_block() {
        let a = Matrix::from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap();
        let result = qr_algorithm(&a, &QrOptions::default()).unwrap();
        assert!(result.converged);
        assert_eq!(result.sweeps, 0);
        assert_eq!(result.eigenvalues, vec![Complex::I, -Complex::I]);
        assert_eq!(result.eigenvectors, vec![None, None]);
    }

    #[test]
    fn test_symmetric_tridiagonal() {
        let a = Matrix::from_rows(&[
            vec![2.0, 1.0, 0.0, 0.0],
            vec![1.0, 3.0, 1.0, 0.0],
            vec![0.0, 1.0, 4.0, 1.0],
            vec![0.0, 0.0, 1.0, 5.0],
        ])
        .unwrap();
        let result = qr_algorithm(&a, &QrOptions::default()).unwrap();
        assert!(result.converged);
        for (lambda, v) in result.eigenvalues.iter().zip(&result.eigenvectors) {
            let v = v.as_ref().unwrap();
            assert!(residual(&a, lambda.re, v) < 1e-8, "λ = {lambda}");
        }
        let trace: f64 = result.eigenvalues.iter().map(|z| z.re).sum();
        assert!((trace - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_back_substitution_on_non_normal() {
        let a = Matrix::from_rows(&[
            vec![4.0, 1.0, 2.0],
            vec![0.0, 3.0, 1.0],
            vec![1.0, 0.0, 2.0],
        ])
        .unwrap();
        let options = QrOptions {
            eigenvectors: EigenvectorMode::BackSubstitution,
            ..QrOptions::default()
        };
        let result = qr_algorithm(&a, &options).unwrap();
        assert!(result.converged);
        assert_eq!(result.eigenvalues.len(), 3);
        for (lambda, v) in result.eigenvalues.iter().zip(&result.eigenvectors) {
            assert_eq!(lambda.im, 0.0);
            assert!(residual(&a, lambda.re, v.as_ref().unwrap()) < 1e-8, "λ = {lambda}");
        }
    }

    #[test]
    fn test_sweep_cap_reports_not_converged() {
        // Cyclic shift: all eigenvalues on the unit circle
        let a = Matrix::from_rows(&[
            vec![0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();
        let options = QrOptions {
            max_sweeps: 50,
            ..QrOptions::default()
        };
        let result = qr_algorithm(&a, &options).unwrap();
        assert!(!result.converged);
        assert_eq!(result.sweeps, 50);
        assert_eq!(result.eigenvalues.len(), 4);
        assert_eq!(result.eigenvectors.len(), 4);
    }

    #[test]
    fn test_rejects_empty() {
        let a = Matrix::from_vec(0, Vec::new()).unwrap();
        assert!(qr_algorithm(&a, &QrOptions::default()).is_err());
    }
}
