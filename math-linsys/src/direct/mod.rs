//! Direct matrix engines
//!
//! This module provides the two building blocks the solvers rely on:
//! - [`determinant`]: Gaussian elimination with partial pivoting
//! - [`invert`]: Gauss-Jordan elimination on the augmented matrix `[M | I]`

mod determinant;
mod inverse;

pub use determinant::determinant;
pub use inverse::{Pivoting, invert, invert_with};
