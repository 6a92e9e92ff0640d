// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared error vocabulary for solver failures.
//!
//! A solver failure is converted into a terminal `ERROR` job record with
//! message `"<Kind>: <msg>"`. `SolveError` carries the two halves
//! separately so every layer (worker, registry, service) can format them
//! the same way without string-parsing a flat message back apart.

use std::fmt;

/// The kind of numerical failure a solver raised, analogous to a Python
/// exception class name (`LinAlgError`, `RuntimeError`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveErrorKind {
    /// Matrix is singular or otherwise not invertible for an exact solve.
    LinAlg,
    /// Matrix/vector shapes are incompatible.
    Shape,
    /// An iterative method failed to converge within its iteration budget.
    NotConverged,
}

impl SolveErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SolveErrorKind::LinAlg => "LinAlgError",
            SolveErrorKind::Shape => "ValueError",
            SolveErrorKind::NotConverged => "RuntimeError",
        }
    }
}

impl fmt::Display for SolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A solver failure, formatted as `"<Kind>: <msg>"` for the terminal job
/// record's `message` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SolveError {
    pub kind: SolveErrorKind,
    pub message: String,
}

impl SolveError {
    pub fn new(kind: SolveErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn singular(message: impl Into<String>) -> Self {
        Self::new(SolveErrorKind::LinAlg, message)
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(SolveErrorKind::Shape, message)
    }

    pub fn not_converged(message: impl Into<String>) -> Self {
        Self::new(SolveErrorKind::NotConverged, message)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
