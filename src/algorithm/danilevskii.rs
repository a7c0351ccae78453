//! Danilevskii reduction to Frobenius (block companion) form
//!
//! Columns are processed from `n−2` down to `0`. Step `c` uses the pivot
//! `A[c+1][c]` to turn row `c+1` into the unit row `e_c` through the
//! similarity `M⁻¹·A·M`, where `M⁻¹` is the identity with row `c` replaced by
//! row `c+1` of `A`. Once every step succeeds the first row holds the
//! characteristic polynomial coefficients.
//!
//! When a pivot is (near) zero and no entry to its left can be swapped in, the
//! rows already reduced form a closed companion block. Its polynomial factor
//! is recorded and the reduction continues on the leading submatrix.
//!
//! ```text
//! ┌ p₁ p₂ … pₘ ┐
//! │ 1  0  … 0  │    det(B − λI) = (−1)ᵐ (λᵐ − p₁λᵐ⁻¹ − … − pₘ)
//! │ ⋮  ⋱     ⋮ │
//! └ 0  …  1  0 ┘
//! ```
//!
//! Eigenvectors are recovered only when the whole matrix ends up as a single
//! companion block: for a root λ, `(λⁿ⁻¹, …, λ, 1)` is an eigenvector of the
//! Frobenius form and the accumulated transform maps it back.

use crate::algorithm::polynomial::{Polynomial, find_roots};
use crate::error::{Error, Result};
use crate::matrix::parallel::for_each_row;
use crate::matrix::{Column, Matrix, Row, row_mul};
use log::{debug, trace};

/// When to exchange rows and columns before an elimination step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Swap only when the pivot is below the tolerance
    #[default]
    WhenSingular,
    /// Always bring the largest-magnitude entry of the pivot row into place
    Partial,
}

/// Options for [`frobenius_form`] and [`danilevskii`]
#[derive(Debug, Clone, Copy)]
pub struct DanilevskiiOptions {
    /// Pivot selection strategy (default: `WhenSingular`)
    pub pivoting: Pivoting,

    /// Pivots with magnitude below this count as zero (default: 1e-9)
    pub pivot_tolerance: f64,
}

impl Default for DanilevskiiOptions {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::WhenSingular,
            pivot_tolerance: 1e-9,
        }
    }
}

/// Frobenius form of a matrix together with the transform that produced it
#[derive(Debug, Clone)]
pub struct FrobeniusForm {
    /// Characteristic polynomial det(A − λI), ascending coefficients
    pub polynomial: Polynomial,
    /// Polynomial factor of every companion block, last block first
    pub blocks: Vec<Polynomial>,
    /// The reduced matrix F
    pub frobenius: Matrix,
    /// S with A·S = S·F
    pub transform: Matrix,
    /// True when the reduction split into more than one block
    pub split: bool,
}

/// Eigen-decomposition through the characteristic polynomial
#[derive(Debug, Clone)]
pub struct DanilevskiiResult {
    /// Characteristic polynomial det(A − λI)
    pub polynomial: Polynomial,
    /// Real roots of the polynomial, ascending
    pub eigenvalues: Vec<f64>,
    /// One eigenvector per eigenvalue (unit max-norm), absent after a split
    pub eigenvectors: Option<Vec<Vec<f64>>>,
}

/// Reduce `a` to Frobenius form
///
/// The input is cloned; the caller's matrix is never modified.
pub fn frobenius_form(a: &Matrix, options: &DanilevskiiOptions) -> Result<FrobeniusForm> {
    let n = a.dim();
    if n == 0 {
        return Err(Error::invalid_argument("a", "matrix must not be empty"));
    }
    if options.pivot_tolerance.is_nan() || options.pivot_tolerance < 0.0 {
        return Err(Error::invalid_argument(
            "pivot_tolerance",
            format!("must be non-negative, got {}", options.pivot_tolerance),
        ));
    }

    let tol = options.pivot_tolerance;
    let mut work = a.clone();
    let mut transform = Matrix::identity(n);
    let mut blocks = Vec::new();
    let mut block_end = n;

    for c in (0..n - 1).rev() {
        let k = c + 1;

        if options.pivoting == Pivoting::Partial || work.get(k, c).abs() < tol {
            swap_in_pivot(&mut work, &mut transform, k, c);
        }

        let pivot = work.get(k, c);
        if pivot.abs() < tol {
            let block = block_polynomial(&work, k, block_end);
            debug!("danilevskii split at row {k}: block {block}");
            blocks.push(block);
            block_end = k;
            continue;
        }

        eliminate(&mut work, &mut transform, k, c, pivot)?;
        trace!("danilevskii column {c} reduced, pivot {pivot}");
    }
    blocks.push(block_polynomial(&work, 0, block_end));

    let split = blocks.len() > 1;
    let polynomial = blocks
        .iter()
        .fold(Polynomial::one(), |acc, block| acc.multiply(block));

    Ok(FrobeniusForm {
        polynomial,
        blocks,
        frobenius: work,
        transform,
        split,
    })
}

/// Characteristic polynomial, real eigenvalues and, when available, eigenvectors
pub fn danilevskii(a: &Matrix, options: &DanilevskiiOptions) -> Result<DanilevskiiResult> {
    let form = frobenius_form(a, options)?;
    let eigenvalues = find_roots(&form.polynomial);
    debug!(
        "danilevskii: degree {} polynomial, {} real roots",
        form.polynomial.degree(),
        eigenvalues.len()
    );

    let eigenvectors = if form.split {
        None
    } else {
        let vectors = eigenvalues
            .iter()
            .map(|&lambda| companion_eigenvector(&form.transform, lambda))
            .collect::<Result<Vec<_>>>()?;
        Some(vectors)
    };

    Ok(DanilevskiiResult {
        polynomial: form.polynomial,
        eigenvalues,
        eigenvectors,
    })
}

/// Exchange index `c` with the largest-magnitude entry of row `k` left of it
fn swap_in_pivot(work: &mut Matrix, transform: &mut Matrix, k: usize, c: usize) {
    let row = work.row(k);
    let mut best = c;
    for (i, x) in row.iter().enumerate().take(c) {
        if x.abs() > row[best].abs() {
            best = i;
        }
    }
    if best == c {
        return;
    }

    // P·A·P with P the (best, c) transposition
    work.swap_columns(best, c);
    work.swap_rows(best, c);
    transform.swap_columns(best, c);
    trace!("danilevskii swapped {best} <-> {c}");
}

/// One similarity step turning row `k` into `e_c`
fn eliminate(
    work: &mut Matrix,
    transform: &mut Matrix,
    k: usize,
    c: usize,
    pivot: f64,
) -> Result<()> {
    let n = work.dim();
    let base = work.row(k).to_vec();

    // Right-multiply by M: column c is scaled by 1/pivot, the others lose
    // a multiple of it. Rows below k are already reduced and stay as they are.
    let right = |_: usize, row: &mut [f64]| {
        let factor = row[c] / pivot;
        for (j, x) in row.iter_mut().enumerate() {
            if j == c {
                *x = factor;
            } else {
                *x -= factor * base[j];
            }
        }
    };
    for_each_row(work.as_mut_slice(), n, k + 1, right);
    for_each_row(transform.as_mut_slice(), n, n, right);

    // Left-multiply by M⁻¹: only row c changes
    let new_row = row_mul(&Row::new(base), work)?;
    for (j, &x) in new_row.as_slice().iter().enumerate() {
        work.set(c, j, x);
    }
    Ok(())
}

/// Polynomial of the companion block spanning rows `start..end`
///
/// The block's coefficients sit in row `start`, columns `start..end`.
fn block_polynomial(work: &Matrix, start: usize, end: usize) -> Polynomial {
    let size = end - start;
    let sign = if size % 2 == 0 { -1.0 } else { 1.0 };
    let row = work.row(start);

    let mut coeffs: Vec<f64> = (start..end).rev().map(|i| sign * row[i]).collect();
    coeffs.push(-sign);
    Polynomial::new(coeffs)
}

/// S·(λⁿ⁻¹, …, λ, 1), scaled to unit max-norm
fn companion_eigenvector(transform: &Matrix, lambda: f64) -> Result<Vec<f64>> {
    let n = transform.dim();
    let mut powers = vec![1.0; n];
    for i in (0..n - 1).rev() {
        powers[i] = powers[i + 1] * lambda;
    }

    let mut v = transform.mul_column(&Column::new(powers))?;
    v.normalize_max();
    Ok(v.into_vec())
}
