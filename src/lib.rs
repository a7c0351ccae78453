//! # eigr
//!
//! **Dense real eigenvalue solvers with parallel per-cell kernels.**
//!
//! eigr computes eigenvalues and eigenvectors of small to medium dense real
//! square matrices by three independent methods:
//!
//! - **Power iteration**: the dominant eigenvalue, a dominant `±λ` pair or a
//!   dominant complex conjugate pair, each validated by a residual check
//! - **Danilevskii**: the characteristic polynomial through the Frobenius
//!   form; real eigenvalues by derivative bracketing and Newton refinement
//! - **QR**: Hessenberg reduction by Givens rotations followed by unshifted
//!   rotation sweeps until the quasi-triangular form converges
//!
//! ## Quick Start
//!
//! ```rust
//! use eigr::prelude::*;
//!
//! let a = Matrix::from_rows(&[
//!     vec![2.0, 0.0, 0.0],
//!     vec![0.0, 3.0, 0.0],
//!     vec![0.0, 0.0, 5.0],
//! ])?;
//!
//! let qr = qr_algorithm(&a, &QrOptions::default())?;
//! assert!(qr.converged);
//!
//! let dan = danilevskii(&a, &DanilevskiiOptions::default())?;
//! assert_eq!(dan.eigenvalues.len(), 3);
//!
//! let power = power_method(&a, &Column::new(vec![1.0; 3]), &PowerOptions::default())?;
//! assert_eq!(power.case, EigenvalueCase::Real);
//! # Ok::<(), eigr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded matrix products, residual checks and
//!   row updates
//!
//! ## Logging
//!
//! Algorithm outcomes are reported through the [`log`] facade at `debug`
//! level and per-iteration progress at `trace` level. No logger is installed
//! by the library.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::polynomial::{Polynomial, find_roots};
    pub use crate::algorithm::{
        DanilevskiiOptions, DanilevskiiResult, Eigenpair, EigenvalueCase, EigenvectorMode,
        Pivoting, PowerIteration, PowerOptions, QrOptions, QrResult, danilevskii,
        frobenius_form, power_method, qr_algorithm,
    };
    pub use crate::dtype::Complex;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::io::{format_matrix, parse_matrix, read_matrix, write_matrix};
    pub use crate::matrix::{Column, Matrix, Row};
}
