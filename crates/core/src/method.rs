// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The recognized set of solver method identifiers.
//!
//! A closed enum rather than a free-form string keyed into a lookup table:
//! an unrecognized wire string is a parse error caught during `SubmitJob`
//! validation, with no reflection or dynamic loading inside the core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverMethod {
    NumpyExact,
    NumpyLstsq,
    NumpyPinv,
    Petsc,
    ScipyGmres,
}

impl SolverMethod {
    pub const ALL: [SolverMethod; 5] = [
        SolverMethod::NumpyExact,
        SolverMethod::NumpyLstsq,
        SolverMethod::NumpyPinv,
        SolverMethod::Petsc,
        SolverMethod::ScipyGmres,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SolverMethod::NumpyExact => "numpy_exact",
            SolverMethod::NumpyLstsq => "numpy_lstsq",
            SolverMethod::NumpyPinv => "numpy_pinv",
            SolverMethod::Petsc => "petsc",
            SolverMethod::ScipyGmres => "scipy_gmres",
        }
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method string that did not match any recognized [`SolverMethod`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for SolverMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numpy_exact" => Ok(SolverMethod::NumpyExact),
            "numpy_lstsq" => Ok(SolverMethod::NumpyLstsq),
            "numpy_pinv" => Ok(SolverMethod::NumpyPinv),
            "petsc" => Ok(SolverMethod::Petsc),
            "scipy_gmres" => Ok(SolverMethod::ScipyGmres),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "method_tests.rs"]
mod tests;
