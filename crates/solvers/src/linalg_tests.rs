use super::*;

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < tol, "expected {e}, got {a}");
    }
}

#[test]
fn solve_square_matches_known_solution() {
    let a = vec![vec![3.0, 2.0], vec![1.0, 4.0]];
    let b = vec![10.0, 8.0];
    let x = solve_square(&a, &b).expect("solvable");
    // 3x + 2y = 10, x + 4y = 8 => x=2.4, y=1.4
    assert_close(&x, &[2.4, 1.4], 1e-9);
}

#[test]
fn solve_square_detects_singular_matrix() {
    let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    let b = vec![1.0, 1.0];
    let err = solve_square(&a, &b).unwrap_err();
    assert!(err.to_string().starts_with("LinAlgError"));
}

#[test]
fn solve_square_rejects_shape_mismatch() {
    let a = vec![vec![1.0, 2.0]];
    let b = vec![1.0, 2.0];
    let err = solve_square(&a, &b).unwrap_err();
    assert!(err.to_string().starts_with("ValueError"));
}

#[test]
fn least_squares_matches_exact_solution_for_square_system() {
    let a = vec![vec![3.0, 2.0], vec![1.0, 4.0]];
    let b = vec![10.0, 8.0];
    let x = solve_least_squares(&a, &b).expect("solvable");
    assert_close(&x, &[2.4, 1.4], 1e-6);
}

#[test]
fn least_squares_handles_overdetermined_system() {
    // y = 2x fit through noisy points; least squares should recover slope ~2.
    let a = vec![vec![1.0], vec![2.0], vec![3.0]];
    let b = vec![2.1, 3.9, 6.1];
    let x = solve_least_squares(&a, &b).expect("solvable");
    assert!((x[0] - 2.0).abs() < 0.2);
}

#[test]
fn pseudoinverse_handles_rank_deficient_matrix() {
    let a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    let b = vec![1.0, 2.0];
    let x = solve_pseudoinverse(&a, &b, 1e-8).expect("regularized solve succeeds");
    assert_eq!(x.len(), 2);
}

#[test]
fn iterative_converges_on_diagonally_dominant_system() {
    let a = vec![vec![4.0, 1.0], vec![1.0, 3.0]];
    let b = vec![5.0, 4.0];
    let x = solve_iterative(&a, &b, 1e-10, 100).expect("should converge");
    assert_close(&x, &[1.0, 1.0], 1e-6);
}

#[test]
fn iterative_reports_non_convergence() {
    let a = vec![vec![1.0, 10.0], vec![10.0, 1.0]];
    let b = vec![1.0, 1.0];
    let err = solve_iterative(&a, &b, 1e-12, 5).unwrap_err();
    assert!(err.to_string().starts_with("RuntimeError"));
}
