// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Iterative solve, mirroring PETSc's KSP(gmres) solver.

use crate::{linalg, Solver};
use slae_core::SolveError;

const DEFAULT_TOL: f64 = 1e-8;
const DEFAULT_MAX_ITER: usize = 1000;

#[derive(Debug, Clone, Copy)]
pub struct PetscSolver {
    tol: f64,
    max_iter: usize,
}

impl Default for PetscSolver {
    fn default() -> Self {
        Self { tol: DEFAULT_TOL, max_iter: DEFAULT_MAX_ITER }
    }
}

impl Solver for PetscSolver {
    fn solve(&self, matrix: &[Vec<f64>], rhs: &[f64]) -> Result<Vec<f64>, SolveError> {
        linalg::solve_iterative(matrix, rhs, self.tol, self.max_iter)
    }
}
