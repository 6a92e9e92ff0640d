// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Small dense linear algebra kernels shared by the solver implementations.
//!
//! This is a stand-in for the NumPy/SciPy/PETSc calls the original service
//! makes — see `crates/solvers` module docs. No external numerical crate is
//! pulled in; the kernels are straightforward enough to keep in-house and
//! test directly.

use slae_core::SolveError;

const PIVOT_EPSILON: f64 = 1e-12;

/// Solve a square system `A x = b` via Gaussian elimination with partial
/// pivoting. `a` is row-major, `a.len() == a[i].len() == b.len()`.
pub fn solve_square(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, SolveError> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(SolveError::shape(format!(
            "expected a square {n}x{n} matrix, got {}x{}",
            a.len(),
            a.first().map_or(0, Vec::len)
        )));
    }

    // Augmented matrix, mutated in place.
    let mut m: Vec<Vec<f64>> = a.iter().zip(b).map(|(row, &bi)| {
        let mut r = row.clone();
        r.push(bi);
        r
    }).collect();

    for col in 0..n {
        // Partial pivot: largest absolute value in this column, at or below the diagonal.
        let pivot_row = (col..n)
            .max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))
            .unwrap_or(col);

        if m[pivot_row][col].abs() < PIVOT_EPSILON {
            return Err(SolveError::singular("matrix is singular to working precision"));
        }

        m.swap(col, pivot_row);

        for row in (col + 1)..n {
            let factor = m[row][col] / m[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..=n {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = m[row][n];
        for k in (row + 1)..n {
            sum -= m[row][k] * x[k];
        }
        x[row] = sum / m[row][row];
    }
    Ok(x)
}

/// `A^T` times `A`, and `A^T` times `b` — the normal equations for a
/// least-squares solve of a possibly non-square/overdetermined system.
fn normal_equations(a: &[Vec<f64>], b: &[f64]) -> Result<(Vec<Vec<f64>>, Vec<f64>), SolveError> {
    let rows = a.len();
    if rows != b.len() {
        return Err(SolveError::shape(format!(
            "matrix has {rows} rows but rhs has {} entries",
            b.len()
        )));
    }
    let cols = a.first().map_or(0, Vec::len);
    if a.iter().any(|row| row.len() != cols) {
        return Err(SolveError::shape("matrix rows have inconsistent lengths"));
    }
    if cols == 0 {
        return Err(SolveError::shape("matrix has zero columns"));
    }

    let mut ata = vec![vec![0.0; cols]; cols];
    let mut atb = vec![0.0; cols];
    for i in 0..cols {
        for j in 0..cols {
            ata[i][j] = (0..rows).map(|k| a[k][i] * a[k][j]).sum();
        }
        atb[i] = (0..rows).map(|k| a[k][i] * b[k]).sum();
    }
    Ok((ata, atb))
}

/// Least-squares solve via the normal equations, matching
/// `numpy.linalg.lstsq` for well-conditioned systems.
pub fn solve_least_squares(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, SolveError> {
    let (ata, atb) = normal_equations(a, b)?;
    solve_square(&ata, &atb)
}

/// Least-squares solve via Tikhonov-regularized normal equations — a stand-in
/// for `numpy.linalg.pinv`, which (unlike plain `lstsq`) stays well-defined
/// for rank-deficient matrices.
pub fn solve_pseudoinverse(a: &[Vec<f64>], b: &[f64], ridge: f64) -> Result<Vec<f64>, SolveError> {
    let (mut ata, atb) = normal_equations(a, b)?;
    for (i, row) in ata.iter_mut().enumerate() {
        row[i] += ridge;
    }
    solve_square(&ata, &atb)
}

/// Gauss-Seidel iterative solve — a stand-in for PETSc's KSP / SciPy's GMRES,
/// which both converge on diagonally-dominant or otherwise well-conditioned
/// square systems.
pub fn solve_iterative(
    a: &[Vec<f64>],
    b: &[f64],
    tol: f64,
    max_iter: usize,
) -> Result<Vec<f64>, SolveError> {
    let n = b.len();
    if a.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(SolveError::shape(format!(
            "expected a square {n}x{n} matrix, got {}x{}",
            a.len(),
            a.first().map_or(0, Vec::len)
        )));
    }
    if a.iter().enumerate().any(|(i, row)| row[i].abs() < PIVOT_EPSILON) {
        return Err(SolveError::singular("zero on the diagonal, cannot iterate"));
    }

    let mut x = vec![0.0; n];
    for _ in 0..max_iter {
        let mut max_delta: f64 = 0.0;
        for i in 0..n {
            let sum: f64 = (0..n).filter(|&j| j != i).map(|j| a[i][j] * x[j]).sum();
            let updated = (b[i] - sum) / a[i][i];
            max_delta = max_delta.max((updated - x[i]).abs());
            x[i] = updated;
        }
        if max_delta < tol {
            return Ok(x);
        }
    }
    Err(SolveError::not_converged(format!(
        "did not converge within {max_iter} iterations"
    )))
}

#[cfg(test)]
#[path = "linalg_tests.rs"]
mod tests;
