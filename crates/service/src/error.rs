// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Failures that abort a service operation before it can produce a
/// `Declined`/`Completed` envelope — distinct from the decline reasons
/// a response carries, which are expected outcomes, not errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to start worker: {0}")]
    WorkerSpawn(#[from] slae_registry::WorkerError),
}
