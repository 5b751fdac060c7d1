//! Cramer's rule: xᵢ = det(Aᵢ) / det(A)
//!
//! Each Aᵢ is A with column i replaced by b. The n determinants only read the
//! original A and b, so they can be evaluated in any order or concurrently
//! without changing any xᵢ.

use crate::dense::{format_fixed, is_negligible, replace_column};
use crate::direct::determinant;
use crate::parallel::parallel_map_indexed;
use crate::solution::{SolutionMethod, SolutionResult};
use crate::steps::StepRecorder;
use crate::traits::LinearSystemSolver;
use ndarray::{Array1, Array2};

/// Cramer's rule configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct CramerSolver {
    /// Evaluate the column determinants on the rayon pool
    pub parallel: bool,
}

impl CramerSolver {
    /// Solver evaluating the column determinants concurrently
    pub fn parallel() -> Self {
        Self { parallel: true }
    }
}

impl LinearSystemSolver for CramerSolver {
    fn method(&self) -> SolutionMethod {
        SolutionMethod::Cramer
    }

    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult {
        let n = a.nrows();
        let mut steps = StepRecorder::new();
        steps.record(SolutionMethod::Cramer.title());
        steps.record("1. Computing the main determinant");

        let main_det = determinant(a);
        steps.record(format!("   Main determinant = {}", format_fixed(main_det, 4)));

        if is_negligible(main_det) {
            steps.record("   The main determinant is zero, Cramer's rule cannot be applied");
            log::debug!("cramer: singular matrix (det = {:e})", main_det);
            return SolutionResult {
                method: SolutionMethod::Cramer,
                solution: None,
                steps: steps.into_steps(),
                determinant: Some(main_det),
            };
        }

        steps.record("2. Computing the determinant for each variable:");

        let column_det = |i: usize| determinant(&replace_column(a, i, b));
        let dets: Vec<f64> = if self.parallel {
            parallel_map_indexed(n, column_det)
        } else {
            (0..n).map(column_det).collect()
        };

        let mut x = Array1::zeros(n);
        for (i, det_i) in dets.into_iter().enumerate() {
            x[i] = det_i / main_det;
            steps.record(format!(
                "   x{k}: det(A{k}) = {}, x{k} = {}",
                format_fixed(det_i, 4),
                format_fixed(x[i], 4),
                k = i + 1
            ));
        }

        log::debug!("cramer: solved {}x{} system", n, n);
        SolutionResult {
            method: SolutionMethod::Cramer,
            solution: Some(x),
            steps: steps.into_steps(),
            determinant: Some(main_det),
        }
    }
}

/// Solve `Ax = b` with Cramer's rule (sequential)
pub fn solve_by_cramer(a: &Array2<f64>, b: &Array1<f64>) -> SolutionResult {
    CramerSolver::default().solve(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_cramer_3x3() {
        let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0, -11.0, -3.0];

        let result = solve_by_cramer(&a, &b);

        let x = result.solution.expect("system is solvable");
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-10);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-10);
        assert_relative_eq!(result.determinant.unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cramer_steps() {
        let a = array![[2.0, 1.0], [1.0, 1.0]];
        let b = array![3.0, 2.0];

        let result = solve_by_cramer(&a, &b);

        assert_eq!(
            result.steps,
            vec![
                "Cramer's Rule",
                "1. Computing the main determinant",
                "   Main determinant = 1.0000",
                "2. Computing the determinant for each variable:",
                "   x1: det(A1) = 1.0000, x1 = 1.0000",
                "   x2: det(A2) = 1.0000, x2 = 1.0000",
            ]
        );
    }

    #[test]
    fn test_cramer_singular() {
        let a = array![[1.0, 1.0], [2.0, 2.0]];
        let b = array![1.0, 2.0];

        let result = solve_by_cramer(&a, &b);

        assert!(result.solution.is_none());
        assert_eq!(result.determinant, Some(0.0));
        assert_eq!(result.steps.len(), 4);
    }

    #[test]
    fn test_cramer_parallel_matches_sequential() {
        let a = array![
            [4.0, -2.0, 1.0, 3.0],
            [3.0, 6.0, -4.0, 2.0],
            [2.0, 1.0, 8.0, -5.0],
            [1.0, -3.0, 2.0, 7.0]
        ];
        let b = array![12.0, -25.0, 32.0, 4.0];

        let sequential = solve_by_cramer(&a, &b);
        let parallel = CramerSolver::parallel().solve(&a, &b);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_cramer_order_independent() {
        // Each xᵢ computed on its own equals the value from the full solve
        let a = array![[3.0, 2.0, -1.0], [2.0, -2.0, 4.0], [-1.0, 0.5, -1.0]];
        let b = array![1.0, -2.0, 0.0];

        let full = solve_by_cramer(&a, &b).solution.unwrap();
        let det = determinant(&a);
        for i in (0..3).rev() {
            let xi = determinant(&replace_column(&a, i, &b)) / det;
            assert_eq!(xi, full[i]);
        }
        assert_relative_eq!(full[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(full[1], -2.0, epsilon = 1e-10);
        assert_relative_eq!(full[2], -2.0, epsilon = 1e-10);
    }
}
