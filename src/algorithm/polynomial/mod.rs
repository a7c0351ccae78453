//! Real polynomials and real root finding
//!
//! # Coefficient Convention
//!
//! Polynomials are stored in ascending power order:
//! - `coeffs[0]` = constant term (c₀)
//! - `coeffs[n]` = leading coefficient (cₙ)
//! - p(x) = c₀ + c₁x + c₂x² + ... + cₙxⁿ
//!
//! # Functions
//!
//! - [`find_roots`] - ordered real roots by derivative bracketing + Newton
//! - [`Polynomial::multiply`] - convolution with near-zero leading terms trimmed
//! - [`Polynomial::from_roots`] - expand (x − r₁)...(x − r_k)

pub mod roots;
pub mod types;

pub use roots::{MAX_BISECTIONS, NEWTON_ACCURACY, find_roots, root_bounds};
pub use types::{Polynomial, TRIM_TOLERANCE};
