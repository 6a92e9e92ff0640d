// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `JobRecord`: the per-job mutable value guarded by its own lock.

use crate::wire::WorkerOutcome;
use crate::worker::WorkerHandle;
use parking_lot::Mutex;
use slae_core::JobStatus;
use std::time::Instant;
use tokio::sync::oneshot;

/// Fields that must move together under one lock. Kept separate from
/// `result_rx` so the watcher can `try_recv` without ever holding this
/// lock across a channel operation.
#[derive(Debug, Clone)]
pub struct JobRecordState {
    pub status: JobStatus,
    pub solution: Vec<f64>,
    pub message: String,
    pub start_time: Instant,
    pub start_epoch_ms: u64,
    pub end_time: Option<Instant>,
    pub end_epoch_ms: Option<u64>,
    pub delivered: bool,
}

impl JobRecordState {
    fn submitted(now: Instant, now_epoch_ms: u64) -> Self {
        Self {
            status: JobStatus::InProgress,
            solution: Vec::new(),
            message: "Job submitted and is in progress".to_string(),
            start_time: now,
            start_epoch_ms: now_epoch_ms,
            end_time: None,
            end_epoch_ms: None,
            delivered: false,
        }
    }
}

/// A job's mutable state, worker handle, and result channel. The worker
/// and the state lock are split on purpose: `terminate()` and `try_recv()`
/// never happen while the state lock is held — never block on pipe I/O
/// or a process operation while holding it.
pub struct JobRecord {
    state: Mutex<JobRecordState>,
    worker: WorkerHandle,
    result_rx: Mutex<Option<oneshot::Receiver<WorkerOutcome>>>,
}

impl JobRecord {
    pub fn new(
        worker: WorkerHandle,
        result_rx: oneshot::Receiver<WorkerOutcome>,
        now: Instant,
        now_epoch_ms: u64,
    ) -> Self {
        Self {
            state: Mutex::new(JobRecordState::submitted(now, now_epoch_ms)),
            worker,
            result_rx: Mutex::new(Some(result_rx)),
        }
    }

    pub fn worker(&self) -> &WorkerHandle {
        &self.worker
    }

    /// Run `f` against the current state under the record's lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut JobRecordState) -> R) -> R {
        let mut state = self.state.lock();
        f(&mut state)
    }

    pub fn snapshot(&self) -> JobRecordState {
        self.state.lock().clone()
    }

    pub fn status(&self) -> JobStatus {
        self.state.lock().status
    }

    /// Non-blocking poll of the result channel. Must not be called while
    /// the state lock is held.
    pub fn try_recv_result(&self) -> Result<WorkerOutcome, oneshot::error::TryRecvError> {
        let mut guard = self.result_rx.lock();
        match guard.as_mut() {
            Some(rx) => rx.try_recv(),
            None => Err(oneshot::error::TryRecvError::Closed),
        }
    }

    /// Drop the result channel, closing it. Called once at finalization.
    pub fn close_result_channel(&self) {
        *self.result_rx.lock() = None;
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
