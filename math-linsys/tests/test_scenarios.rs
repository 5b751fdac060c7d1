//! End-to-end scenarios: each system is solved by all three methods and the
//! results are checked against known answers.

use approx::assert_relative_eq;
use math_audio_linsys::{
    LinearSystem, Pivoting, SolveOptions, determinant, solve_all, solve_by_cramer,
    solve_by_gauss_jordan, solve_by_inverse,
};
use ndarray::{Array1, Array2, array};

fn assert_solution(x: Option<&Array1<f64>>, expected: &[f64], eps: f64) {
    let x = x.expect("expected a solution");
    assert_eq!(x.len(), expected.len());
    for (xi, ei) in x.iter().zip(expected) {
        assert_relative_eq!(*xi, *ei, epsilon = eps);
    }
}

#[test]
fn test_2x2_example() {
    let a = array![[2.0, 1.0], [1.0, 1.0]];
    let b = array![3.0, 2.0];

    let solutions = solve_all(&a, &b);

    for result in solutions.iter() {
        assert_solution(result.solution.as_ref(), &[1.0, 1.0], 1e-12);
    }
    assert_eq!(solutions.inverse.determinant, Some(1.0));
    assert_eq!(solutions.cramer.determinant, Some(1.0));
    assert_eq!(solutions.gauss_jordan.determinant, None);
}

#[test]
fn test_3x3_example() {
    let system = LinearSystem::example(3).unwrap();

    let solutions = system.solve_all();

    for result in solutions.iter() {
        assert_solution(result.solution.as_ref(), &[2.0, 3.0, -1.0], 1e-10);
    }
    assert_relative_eq!(solutions.inverse.determinant.unwrap(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(solutions.cramer.determinant.unwrap(), -1.0, epsilon = 1e-12);
}

#[test]
fn test_singular_system() {
    let a = array![[1.0, 1.0], [2.0, 2.0]];
    let b = array![1.0, 2.0];

    let inverse = solve_by_inverse(&a, &b);
    let cramer = solve_by_cramer(&a, &b);
    let gauss_jordan = solve_by_gauss_jordan(&a, &b);

    assert!(inverse.solution.is_none());
    assert!(cramer.solution.is_none());
    assert!(gauss_jordan.solution.is_none());
    assert_eq!(inverse.determinant, Some(0.0));
    assert_eq!(cramer.determinant, Some(0.0));
    assert_eq!(gauss_jordan.determinant, None);

    assert!(gauss_jordan.steps.iter().any(|s| s == "2.1 Swapping rows 1 and 2"));
    assert!(gauss_jordan.steps.last().unwrap().contains("inconsistent system"));
}

#[test]
fn test_permutation_system_requires_pivoting() {
    let a = array![[0.0, 1.0], [1.0, 0.0]];
    let b = array![1.0, 2.0];

    assert_relative_eq!(determinant(&a), -1.0);

    // Inversion pivots by default, so every method agrees
    let solutions = solve_all(&a, &b);
    for result in solutions.iter() {
        assert_solution(result.solution.as_ref(), &[2.0, 1.0], 1e-12);
    }
    assert_eq!(solutions.inverse.determinant, Some(-1.0));
    assert!(solutions.gauss_jordan.steps.iter().any(|s| s.contains("Swapping rows 1 and 2")));
}

#[test]
fn test_naive_inversion_keeps_zero_pivot_limitation() {
    let a = array![[0.0, 1.0], [1.0, 0.0]];
    let b = array![1.0, 2.0];
    let options = SolveOptions {
        inversion_pivoting: Pivoting::None,
        parallel: false,
    };

    let solutions = LinearSystem::new(a, b).unwrap().solve_with(&options);

    // Nonzero determinant, yet the inverse method fails without row exchanges
    assert!(solutions.inverse.solution.is_none());
    assert_eq!(solutions.inverse.determinant, Some(-1.0));
    assert_solution(solutions.cramer.solution.as_ref(), &[2.0, 1.0], 1e-12);
    assert_solution(solutions.gauss_jordan.solution.as_ref(), &[2.0, 1.0], 1e-12);
}

#[test]
fn test_identity_returns_constants() {
    for n in 1..=6 {
        let a = Array2::from_diag(&Array1::from_elem(n, 1.0));
        let b = Array1::from_iter((1..=n).map(|i| i as f64 * 1.5 - 4.0));

        let solutions = solve_all(&a, &b);

        for result in solutions.iter() {
            assert_solution(result.solution.as_ref(), b.as_slice().unwrap(), 1e-12);
        }
        assert_eq!(solutions.inverse.determinant, Some(1.0));
        assert_eq!(solutions.cramer.determinant, Some(1.0));
    }
}

#[test]
fn test_4x4_system() {
    let a = array![
        [10.0, -1.0, 2.0, 0.0],
        [-1.0, 11.0, -1.0, 3.0],
        [2.0, -1.0, 10.0, -1.0],
        [0.0, 3.0, -1.0, 8.0]
    ];
    let b = array![6.0, 25.0, -11.0, 15.0];

    let solutions = solve_all(&a, &b);

    for result in solutions.iter() {
        assert_solution(result.solution.as_ref(), &[1.0, 2.0, -1.0, 1.0], 1e-10);
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let a = array![[0.0, 2.0, 1.0], [3.0, 1.0, 0.0], [1.0, 1.0, 1.0]];
    let b = array![4.0, 5.0, 6.0];
    let (a0, b0) = (a.clone(), b.clone());

    let _ = solve_all(&a, &b);
    let _ = solve_all(&a, &b);

    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn test_repeated_solves_are_identical() {
    let system = LinearSystem::example(3).unwrap();
    assert_eq!(system.solve_all(), system.solve_all());
}
