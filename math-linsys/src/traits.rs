//! Core abstraction shared by the solution strategies
//!
//! Every method consumes a coefficient matrix and a constants vector and
//! returns a [`SolutionResult`]. Implementations must not mutate their inputs
//! and must report numerical failure through the result, never by panicking.

use crate::solution::{SolutionMethod, SolutionResult};
use ndarray::{Array1, Array2};

/// A strategy for solving the square system `Ax = b`.
///
/// The caller guarantees that `a` is `n × n` and `b` has length `n`.
pub trait LinearSystemSolver: Send + Sync {
    /// Which method this solver implements
    fn method(&self) -> SolutionMethod;

    /// Solve `Ax = b`, recording every step taken
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult;
}
