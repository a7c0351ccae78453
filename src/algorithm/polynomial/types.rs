//! Real polynomial type

use std::fmt;

/// Coefficients with magnitude below this are treated as zero when trimming
/// the top of a product.
pub const TRIM_TOLERANCE: f64 = 1e-9;

/// Real polynomial with coefficients in ascending power order
///
/// `coeffs[0]` is the constant term and `coeffs[n]` the leading coefficient:
/// p(x) = c₀ + c₁x + c₂x² + ... + cₙxⁿ
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Wrap coefficients as given (ascending order, no trimming)
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { coeffs: vec![1.0] }
    }

    /// Monic polynomial (x − r₁)(x − r₂)...(x − r_k)
    pub fn from_roots(roots: &[f64]) -> Self {
        roots.iter().fold(Self::one(), |acc, &r| {
            acc.multiply(&Self::new(vec![-r, 1.0]))
        })
    }

    /// Coefficients, ascending
    #[inline]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree (number of coefficients minus one); 0 for empty input
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Highest-order coefficient, or 0 for an empty polynomial
    #[inline]
    pub fn leading(&self) -> f64 {
        self.coeffs.last().copied().unwrap_or(0.0)
    }

    /// Evaluate at x using Horner's scheme
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// First derivative
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * i as f64)
            .collect();
        Self { coeffs }
    }

    /// Product by discrete convolution
    ///
    /// Leading coefficients below [`TRIM_TOLERANCE`] are dropped from the
    /// result, keeping at least the constant term.
    pub fn multiply(&self, rhs: &Polynomial) -> Self {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Self { coeffs: Vec::new() };
        }

        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        let mut p = Self { coeffs };
        p.trim(TRIM_TOLERANCE);
        p
    }

    /// Drop leading coefficients with magnitude below `tol`
    ///
    /// The constant term is always kept.
    pub fn trim(&mut self, tol: f64) {
        while self.coeffs.len() > 1 && self.leading().abs() < tol {
            self.coeffs.pop();
        }
    }
}

impl fmt::Display for Polynomial {
    /// Renders as `c0x^{0} + c1x^{1} + ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{c}x^{{{i}}}")?;
        }
        Ok(())
    }
}
