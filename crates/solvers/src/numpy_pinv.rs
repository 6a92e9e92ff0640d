// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pseudoinverse solve, mirroring `numpy.linalg.pinv`.

use crate::{linalg, Solver};
use slae_core::SolveError;

/// Ridge term added to the normal equations' diagonal. Keeps the solve
/// well-defined for rank-deficient matrices that would make a plain
/// least-squares solve singular.
const RIDGE: f64 = 1e-10;

#[derive(Debug, Default, Clone, Copy)]
pub struct NumpyPinvSolver;

impl Solver for NumpyPinvSolver {
    fn solve(&self, matrix: &[Vec<f64>], rhs: &[f64]) -> Result<Vec<f64>, SolveError> {
        linalg::solve_pseudoinverse(matrix, rhs, RIDGE)
    }
}
