// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exact solve of a square system, mirroring `numpy.linalg.solve`.

use crate::{linalg, Solver};
use slae_core::SolveError;

#[derive(Debug, Default, Clone, Copy)]
pub struct NumpyExactSolver;

impl Solver for NumpyExactSolver {
    fn solve(&self, matrix: &[Vec<f64>], rhs: &[f64]) -> Result<Vec<f64>, SolveError> {
        linalg::solve_square(matrix, rhs)
    }
}
