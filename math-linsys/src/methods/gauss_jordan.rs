//! Gauss-Jordan elimination on the augmented matrix `[A | b]`
//!
//! Partial pivoting picks each pivot row; the pivot row is normalized and the
//! pivot column is cleared both above and below, leaving the solution in the
//! last column. No determinant is computed.

use crate::dense::{
    ZERO_TOLERANCE, augment_with_constants, format_fixed, is_negligible, pivot_row, swap_rows,
};
use crate::solution::{SolutionMethod, SolutionResult};
use crate::steps::StepRecorder;
use crate::traits::LinearSystemSolver;
use ndarray::{Array1, Array2};

/// Gauss-Jordan elimination with partial pivoting
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJordanSolver;

impl LinearSystemSolver for GaussJordanSolver {
    fn method(&self) -> SolutionMethod {
        SolutionMethod::GaussJordan
    }

    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult {
        let n = a.nrows();
        let mut aug = augment_with_constants(a, b);

        let mut steps = StepRecorder::new();
        steps.record(SolutionMethod::GaussJordan.title());
        steps.record("1. Initial augmented matrix:");
        steps.record_matrix(&aug);

        for i in 0..n {
            let max_row = pivot_row(&aug, i, i);
            if max_row != i {
                swap_rows(&mut aug, i, max_row);
                steps.record(format!("2.{} Swapping rows {} and {}", i + 1, i + 1, max_row + 1));
            }

            let pivot = aug[[i, i]];
            if is_negligible(pivot) {
                steps.record(format!(
                    "   Pivot at position [{},{}] is zero, inconsistent system",
                    i + 1,
                    i + 1
                ));
                log::debug!("gauss-jordan: pivot collapsed in column {}", i);
                return SolutionResult {
                    method: SolutionMethod::GaussJordan,
                    solution: None,
                    steps: steps.into_steps(),
                    determinant: None,
                };
            }

            for j in 0..=n {
                aug[[i, j]] /= pivot;
            }
            steps.record(format!(
                "2.{} Normalizing row {} (dividing by {})",
                i + 1,
                i + 1,
                format_fixed(pivot, 4)
            ));

            for k in 0..n {
                if k == i || aug[[k, i]].abs() <= ZERO_TOLERANCE {
                    continue;
                }
                let factor = aug[[k, i]];
                for j in 0..=n {
                    let update = factor * aug[[i, j]];
                    aug[[k, j]] -= update;
                }
                steps.record(format!(
                    "   Eliminating in row {} (factor: {})",
                    k + 1,
                    format_fixed(factor, 4)
                ));
            }
        }

        steps.record("3. Reduced row echelon form:");
        steps.record_matrix(&aug);

        let x = aug.column(n).to_owned();
        log::debug!("gauss-jordan: solved {}x{} system", n, n);
        SolutionResult {
            method: SolutionMethod::GaussJordan,
            solution: Some(x),
            steps: steps.into_steps(),
            determinant: None,
        }
    }
}

/// Solve `Ax = b` by Gauss-Jordan elimination
pub fn solve_by_gauss_jordan(a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult {
    GaussJordanSolver.solve(a, b)
}
