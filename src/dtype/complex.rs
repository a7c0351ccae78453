//! Complex scalar used for eigenvalues and eigenvectors
//!
//! Real matrices can have complex-conjugate eigenvalue pairs, so every solver
//! reports its results through [`Complex`]. The type is a plain `(re, im)` pair
//! of `f64` with the usual arithmetic; it does not depend on any host complex
//! facility.
//!
//! # Storage Format
//!
//! `Complex` is `#[repr(C)]` and `Pod`, so a `&[Complex]` can be viewed as an
//! interleaved `&[f64]` (re, im, re, im...) without copying, see
//! [`as_interleaved`].
//!
//! # Examples
//!
//! ```
//! use eigr::dtype::Complex;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//!
//! let w = Complex::new(1.0, 2.0);
//! let product = z * w;
//! assert_eq!(product, Complex::new(-5.0, 10.0));
//! ```

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 128-bit complex number with f64 real and imaginary parts
///
/// Memory layout: two f64 values, interleaved.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit i
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a purely real complex number
    #[inline]
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Create a complex number from polar form: r * e^(iθ)
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Squared magnitude: |z|² = re² + im²
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle (argument): atan2(im, re)
    #[inline]
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiply by a real scalar
    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }

    /// Square root using the principal branch
    ///
    /// For a negative real input the result lies on the positive imaginary
    /// axis, so `Complex::real(-4.0).sqrt() == 2i`.
    #[inline]
    pub fn sqrt(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            let re = ((mag + self.re) / 2.0).sqrt();
            let sign = if self.im < 0.0 { -1.0 } else { 1.0 };
            let im = sign * ((mag - self.re) / 2.0).sqrt();
            Self { re, im }
        }
    }

    /// True when the imaginary part is within `tol` of zero
    #[inline]
    pub fn is_real(self, tol: f64) -> bool {
        self.im.abs() <= tol
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl Mul for Complex {
    type Output = Self;

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Div for Complex {
    type Output = Self;

    /// Complex division: (a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.magnitude_squared();
        if denom == 0.0 {
            Self {
                re: f64::NAN,
                im: f64::NAN,
            }
        } else {
            Self {
                re: (self.re * rhs.re + self.im * rhs.im) / denom,
                im: (self.im * rhs.re - self.re * rhs.im) / denom,
            }
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            re: self.re / rhs,
            im: self.im / rhs,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, z| acc + z)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{}+{}i", self.re, self.im)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

/// View a complex slice as interleaved `[re0, im0, re1, im1, ...]`
pub fn as_interleaved(values: &[Complex]) -> &[f64] {
    bytemuck::cast_slice(values)
}

/// Lift a real vector into complex storage
pub fn complexify(values: &[f64]) -> Vec<Complex> {
    values.iter().copied().map(Complex::real).collect()
}
