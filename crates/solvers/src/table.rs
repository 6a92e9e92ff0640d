// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lookup from a recognized [`SolverMethod`] to its [`Solver`] capability.

use crate::numpy_exact::NumpyExactSolver;
use crate::numpy_lstsq::NumpyLstsqSolver;
use crate::numpy_pinv::NumpyPinvSolver;
use crate::petsc::PetscSolver;
use crate::scipy_gmres::ScipyGmresSolver;
use crate::Solver;
use slae_core::SolverMethod;
use std::sync::Arc;

/// Resolve a recognized method to its solver. Infallible — `SolverMethod`
/// parsing (which can fail) happens earlier, at request validation time.
pub fn lookup(method: SolverMethod) -> Arc<dyn Solver> {
    match method {
        SolverMethod::NumpyExact => Arc::new(NumpyExactSolver),
        SolverMethod::NumpyLstsq => Arc::new(NumpyLstsqSolver),
        SolverMethod::NumpyPinv => Arc::new(NumpyPinvSolver),
        SolverMethod::Petsc => Arc::new(PetscSolver::default()),
        SolverMethod::ScipyGmres => Arc::new(ScipyGmresSolver::default()),
    }
}
