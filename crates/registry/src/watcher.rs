// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watcher loop: polls each in-progress job's result channel and reaps
//! dead workers.

use crate::error::WatcherError;
use crate::map::ConcurrentMap;
use crate::record::JobRecord;
use slae_core::{Clock, JobId, JobStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::error::TryRecvError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Run until `cancel` fires. Shutdown latency is bounded by one
/// `poll_interval` since the sleep and the cancellation are raced in the
/// same `select!`.
pub async fn run<C: Clock>(
    map: Arc<ConcurrentMap<JobId, Arc<JobRecord>>>,
    clock: C,
    poll_interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("watcher loop stopping");
                return;
            }
            _ = tokio::time::sleep(poll_interval) => {}
        }

        for id in map.keys() {
            let Some(record) = map.get(&id) else {
                // Evicted by the cleaner between the snapshot and this lookup.
                continue;
            };
            if let Err(err) = poll_job(&record, &clock) {
                warn!(job_id = %id, error = %err, "watcher error handling job");
                record.with_state(|state| {
                    if !state.status.is_terminal() {
                        state.status = JobStatus::Error;
                        state.message = format!("Watcher error: {err}");
                        state.end_time = Some(clock.now());
                        state.end_epoch_ms = Some(clock.epoch_ms());
                    }
                });
            }
        }
    }
}

fn poll_job<C: Clock>(record: &JobRecord, clock: &C) -> Result<(), WatcherError> {
    if record.status() != JobStatus::InProgress {
        return Ok(());
    }

    match record.try_recv_result() {
        Ok(outcome) => {
            if !outcome.status.is_terminal() {
                return Err(WatcherError::Message(format!(
                    "worker sent non-terminal status {outcome}",
                    outcome = outcome.status
                )));
            }
            record.with_state(|state| {
                state.status = outcome.status;
                state.solution = outcome.solution;
                state.message = outcome.message;
                state.end_time = Some(clock.now());
                state.end_epoch_ms = Some(clock.epoch_ms());
            });
            Ok(())
        }
        // Empty: no result yet, worker may still be running. Closed: the
        // worker dropped its sender without writing a line, meaning it
        // died or crashed before replying. Both converge on the same
        // liveness check.
        Err(TryRecvError::Empty | TryRecvError::Closed) => {
            if !record.worker().is_alive() {
                mark_worker_exited(record, clock);
            }
            Ok(())
        }
    }
}

fn mark_worker_exited<C: Clock>(record: &JobRecord, clock: &C) {
    let exit_code = record
        .worker()
        .exit_code()
        .map(|code| code.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    record.with_state(|state| {
        if state.status == JobStatus::InProgress {
            state.status = JobStatus::Error;
            state.message = format!("Worker exited, exitcode={exit_code}");
            state.end_time = Some(clock.now());
            state.end_epoch_ms = Some(clock.epoch_ms());
        }
    });
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
