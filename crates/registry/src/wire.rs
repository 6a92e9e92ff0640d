// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON wire types exchanged with `slae-worker` over stdin/stdout.
//!
//! The supervisor writes one [`WorkerInput`] line and closes stdin; the
//! worker writes exactly one [`WorkerOutcome`] line and exits.

use serde::{Deserialize, Serialize};
use slae_core::{JobStatus, SolverMethod};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerInput {
    pub method: SolverMethod,
    pub matrix: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerOutcome {
    pub status: JobStatus,
    pub solution: Vec<f64>,
    pub message: String,
}

impl WorkerOutcome {
    pub fn solved(solution: Vec<f64>) -> Self {
        Self { status: JobStatus::Done, solution, message: "Solved".to_string() }
    }

    pub fn failed(message: String) -> Self {
        Self { status: JobStatus::Error, solution: Vec::new(), message }
    }
}
