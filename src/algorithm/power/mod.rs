//! Power iteration with closed-form estimators for the dominant eigenvalues
//!
//! The sequence `u_{k+1} = A·u_k / ‖A·u_k‖∞` is advanced one step per
//! iteration. After each step three estimators are tried in order:
//!
//! 1. [`EigenvalueCase::Real`]: one dominant real eigenvalue.
//! 2. [`EigenvalueCase::OppositePair`]: dominant eigenvalues `±λ`.
//! 3. [`EigenvalueCase::ComplexPair`]: a dominant conjugate pair.
//!
//! A candidate is accepted only when every eigenpair it proposes passes the
//! residual check `‖A·v − λ·v‖ ≤ tolerance` with `v` scaled to unit max-norm.
//! The loop is bounded by [`PowerOptions::max_iterations`]; running out of
//! iterations yields [`EigenvalueCase::Stuck`] rather than an error.
//!
//! # Example
//!
//! ```
//! use eigr::algorithm::power::{EigenvalueCase, PowerOptions, power_method};
//! use eigr::matrix::{Column, Matrix};
//!
//! let a = Matrix::diagonal(&[2.0, 3.0, 5.0]);
//! let x = Column::new(vec![1.0, 1.0, 1.0]);
//! let result = power_method(&a, &x, &PowerOptions::default())?;
//! assert_eq!(result.case, EigenvalueCase::Real);
//! assert!((result.eigenpairs[0].value.re - 5.0).abs() < 1e-9);
//! # Ok::<(), eigr::error::Error>(())
//! ```

pub mod estimators;
pub mod residual;

use crate::algorithm::eigenpair::Eigenpair;
use crate::error::{Error, Result};
use crate::matrix::{Column, Matrix};
use estimators::{Iterate, complex_candidates, opposite_candidates, real_candidate};
use log::{debug, trace};
use residual::validate;

/// Which dominant-eigenvalue structure the power method detected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EigenvalueCase {
    /// One real eigenvalue of strictly largest magnitude
    Real,
    /// Two real eigenvalues `λ` and `−λ`
    OppositePair,
    /// Complex conjugate pair `r·e^{±iθ}`
    ComplexPair,
    /// No estimator validated within the iteration budget
    Stuck,
}

/// Options for [`power_method`]
#[derive(Debug, Clone, Copy)]
pub struct PowerOptions {
    /// Maximum number of power steps (default: 100_000)
    pub max_iterations: usize,

    /// Residual tolerance for accepting a candidate (default: 1e-10)
    ///
    /// Acceptance when ‖A·v − λ·v‖₂ ≤ tolerance, with ‖v‖∞ = 1
    pub tolerance: f64,

    /// Vectors with max-norm at or below this are treated as zero (default: 1e-12)
    pub zero_threshold: f64,
}

impl Default for PowerOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            tolerance: 1e-10,
            zero_threshold: 1e-12,
        }
    }
}

/// Outcome of [`power_method`]
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Detected structure
    pub case: EigenvalueCase,
    /// One pair for `Real`, two for the pair cases, none for `Stuck`
    pub eigenpairs: Vec<Eigenpair>,
    /// Power steps taken
    pub iterations: usize,
}

impl PowerIteration {
    fn found(case: EigenvalueCase, eigenpairs: Vec<Eigenpair>, iterations: usize) -> Self {
        debug!("power method: {case:?} after {iterations} iterations");
        Self {
            case,
            eigenpairs,
            iterations,
        }
    }

    fn stuck(iterations: usize) -> Self {
        debug!("power method stuck after {iterations} iterations");
        Self {
            case: EigenvalueCase::Stuck,
            eigenpairs: Vec::new(),
            iterations,
        }
    }
}

/// Estimate the dominant eigenvalues of `a` starting from `initial`
///
/// `a` is only read. Fails when `initial` has the wrong length or is zero.
pub fn power_method(
    a: &Matrix,
    initial: &Column,
    options: &PowerOptions,
) -> Result<PowerIteration> {
    let n = a.dim();
    if n == 0 {
        return Err(Error::invalid_argument("a", "matrix must not be empty"));
    }
    if initial.len() != n {
        return Err(Error::shape_mismatch(&[n], &[initial.len()]));
    }

    let mut u = initial.clone();
    let scale = u.normalize_max();
    if scale <= options.zero_threshold {
        return Err(Error::invalid_argument(
            "initial",
            "initial vector must not be zero",
        ));
    }
    let v = a.mul_column(&u)?;
    let mut cur = Iterate { u, v, scale };

    for iteration in 1..=options.max_iterations {
        if let Some(pair) = real_candidate(&cur, options.zero_threshold) {
            let mut candidates = [pair];
            if validate(a, &mut candidates, options.tolerance, options.zero_threshold) {
                return Ok(PowerIteration::found(
                    EigenvalueCase::Real,
                    candidates.to_vec(),
                    iteration,
                ));
            }
        }

        let mut u = cur.v.clone();
        let scale = u.normalize_max();
        if scale == 0.0 {
            // A·u vanished but the zero eigenvalue did not validate
            return Ok(PowerIteration::stuck(iteration));
        }
        let v = a.mul_column(&u)?;
        let next = Iterate { u, v, scale };

        if let Some(mut candidates) = opposite_candidates(&cur, &next) {
            if validate(a, &mut candidates, options.tolerance, options.zero_threshold) {
                return Ok(PowerIteration::found(
                    EigenvalueCase::OppositePair,
                    candidates.to_vec(),
                    iteration,
                ));
            }
        }

        if let Some(mut candidates) = complex_candidates(&cur, &next) {
            if validate(a, &mut candidates, options.tolerance, options.zero_threshold) {
                return Ok(PowerIteration::found(
                    EigenvalueCase::ComplexPair,
                    candidates.to_vec(),
                    iteration,
                ));
            }
        }

        trace!("power step {iteration}: scale {scale}");
        cur = next;
    }

    Ok(PowerIteration::stuck(options.max_iterations))
}
