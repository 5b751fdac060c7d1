//! Matrix inverse method: x = A⁻¹ b

use crate::dense::{format_fixed, is_negligible, matvec};
use crate::direct::{Pivoting, determinant, invert_with};
use crate::solution::{SolutionMethod, SolutionResult};
use crate::steps::StepRecorder;
use crate::traits::LinearSystemSolver;
use ndarray::{Array1, Array2};

/// Inverse method configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct InverseSolver {
    /// Pivoting policy of the inversion engine
    pub pivoting: Pivoting,
}

impl InverseSolver {
    /// Solver using the given inversion pivoting policy
    pub fn new(pivoting: Pivoting) -> Self {
        Self { pivoting }
    }
}

impl LinearSystemSolver for InverseSolver {
    fn method(&self) -> SolutionMethod {
        SolutionMethod::Inverse
    }

    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult {
        let mut steps = StepRecorder::new();
        steps.record(SolutionMethod::Inverse.title());
        steps.record("1. Computing the determinant of matrix A");

        let det = determinant(a);
        steps.record(format!("   Determinant = {}", format_fixed(det, 4)));

        let finish = |solution: Option<Array1<f64>>, steps: StepRecorder| SolutionResult {
            method: SolutionMethod::Inverse,
            solution,
            steps: steps.into_steps(),
            determinant: Some(det),
        };

        if is_negligible(det) {
            steps.record("   The determinant is zero, the system has no unique solution");
            log::debug!("inverse method: singular matrix (det = {:e})", det);
            return finish(None, steps);
        }

        steps.record("2. Computing the inverse matrix A⁻¹");
        let Some(inverse) = invert_with(a, self.pivoting) else {
            steps.record("   A zero pivot was met while inverting, A⁻¹ could not be computed");
            log::debug!(
                "inverse method: inversion failed despite det = {:e} ({:?} pivoting)",
                det,
                self.pivoting
            );
            return finish(None, steps);
        };

        steps.record("3. Multiplying A⁻¹ × b to obtain x");
        let x = matvec(&inverse, b);
        steps.record("   Solution obtained: x = A⁻¹ × b");

        log::debug!("inverse method: solved {}x{} system", a.nrows(), a.ncols());
        finish(Some(x), steps)
    }
}

/// Solve `Ax = b` through the inverse of A (partial pivoting)
pub fn solve_by_inverse(a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult {
    InverseSolver::default().solve(a, b)
}
