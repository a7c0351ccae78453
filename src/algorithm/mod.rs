//! Eigenvalue algorithms
//!
//! Three independent methods over the dense [`Matrix`](crate::matrix::Matrix)
//! type:
//!
//! - [`power`]: dominant eigenvalues by power iteration, with closed-form
//!   estimators for a real eigenvalue, a `±λ` pair and a conjugate pair
//! - [`danilevskii`]: characteristic polynomial through the Frobenius form,
//!   with real eigenvalues from [`polynomial::find_roots`]
//! - [`qr`]: Hessenberg reduction followed by unshifted rotation sweeps
//!
//! Every entry point takes the matrix by shared reference and an options
//! struct with documented defaults. None of them panics on ill-conditioned
//! input; iteration caps turn non-convergence into a reported outcome.

pub mod danilevskii;
pub mod eigenpair;
pub mod polynomial;
pub mod power;
pub mod qr;

pub use danilevskii::{
    DanilevskiiOptions, DanilevskiiResult, FrobeniusForm, Pivoting, danilevskii, frobenius_form,
};
pub use eigenpair::Eigenpair;
pub use power::{EigenvalueCase, PowerIteration, PowerOptions, power_method};
pub use qr::{EigenvectorMode, QrOptions, QrResult, qr_algorithm};
