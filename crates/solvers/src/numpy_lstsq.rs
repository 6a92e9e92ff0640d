// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Least-squares solve, mirroring `numpy.linalg.lstsq`.

use crate::{linalg, Solver};
use slae_core::SolveError;

#[derive(Debug, Default, Clone, Copy)]
pub struct NumpyLstsqSolver;

impl Solver for NumpyLstsqSolver {
    fn solve(&self, matrix: &[Vec<f64>], rhs: &[f64]) -> Result<Vec<f64>, SolveError> {
        linalg::solve_least_squares(matrix, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_overdetermined_system() {
        let x = NumpyLstsqSolver
            .solve(&[vec![1.0], vec![2.0], vec![3.0]], &[2.0, 4.0, 6.0])
            .expect("solvable");
        assert!((x[0] - 2.0).abs() < 1e-6);
    }
}
