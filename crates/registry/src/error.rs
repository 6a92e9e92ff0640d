// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for worker supervision and the background loops.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to spawn worker process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to write job input to worker stdin: {0}")]
    WriteStdin(#[source] std::io::Error),

    #[error("worker process has no stdin/stdout pipe")]
    MissingPipe,
}

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("{0}")]
    Message(String),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry loops failed to start: {0}")]
    StartFailed(String),
}
