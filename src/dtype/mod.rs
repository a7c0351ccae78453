//! Scalar types shared by the solvers

pub mod complex;

pub use complex::{Complex, as_interleaved, complexify};
