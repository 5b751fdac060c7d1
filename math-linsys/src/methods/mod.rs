//! Solution strategies for square linear systems
//!
//! Three independent methods, each returning a [`SolutionResult`](crate::SolutionResult)
//! with its own step log:
//! - [`solve_by_inverse`]: x = A⁻¹ b, gated on det(A) ≠ 0
//! - [`solve_by_cramer`]: one determinant per variable
//! - [`solve_by_gauss_jordan`]: reduction of `[A | b]` with partial pivoting

mod cramer;
mod gauss_jordan;
mod inverse;

pub use cramer::{CramerSolver, solve_by_cramer};
pub use gauss_jordan::{GaussJordanSolver, solve_by_gauss_jordan};
pub use inverse::{InverseSolver, solve_by_inverse};
