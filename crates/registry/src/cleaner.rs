// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cleaner loop: evicts delivered-terminal or TTL-expired records and
//! force-kills timed-out workers.

use crate::map::ConcurrentMap;
use crate::record::JobRecord;
use slae_core::{Clock, JobId, JobStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub async fn run<C: Clock>(
    map: Arc<ConcurrentMap<JobId, Arc<JobRecord>>>,
    clock: C,
    job_timeout: Duration,
    result_ttl: Duration,
    poll_interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("cleaner loop stopping");
                return;
            }
            _ = tokio::time::sleep(poll_interval) => {}
        }

        for id in map.keys() {
            let Some(record) = map.get(&id) else {
                continue;
            };
            handle_job(&map, &id, &record, &clock, job_timeout, result_ttl).await;
        }
    }
}

async fn handle_job<C: Clock>(
    map: &Arc<ConcurrentMap<JobId, Arc<JobRecord>>>,
    id: &JobId,
    record: &Arc<JobRecord>,
    clock: &C,
    job_timeout: Duration,
    result_ttl: Duration,
) {
    let snapshot = record.snapshot();

    if snapshot.status.is_terminal() {
        if snapshot.delivered && !record.worker().is_alive() {
            info!(job_id = %id, "evicting delivered job");
            finalize(map, id, record).await;
            return;
        }
        if let Some(end_time) = snapshot.end_time {
            if clock.now().saturating_duration_since(end_time) > result_ttl {
                info!(job_id = %id, "evicting job past result TTL");
                finalize(map, id, record).await;
            }
        }
        return;
    }

    if clock.now().saturating_duration_since(snapshot.start_time) > job_timeout {
        record.with_state(|state| {
            if state.status == JobStatus::InProgress {
                state.status = JobStatus::Error;
                state.message = format!("Timeout for job {id}");
                state.end_time = Some(clock.now());
                state.end_epoch_ms = Some(clock.epoch_ms());
            }
        });
        info!(job_id = %id, "job timed out, terminating worker");
        record.worker().terminate().await;
    }
}

/// Ensure the worker is dead, drop the result channel, and remove the
/// record from the map. Best-effort: a worker that is still exiting at
/// TTL eviction is terminated here rather than left to leak.
async fn finalize(
    map: &Arc<ConcurrentMap<JobId, Arc<JobRecord>>>,
    id: &JobId,
    record: &Arc<JobRecord>,
) {
    if record.worker().is_alive() {
        record.worker().terminate().await;
    }
    record.close_result_channel();
    map.pop(id);
}

#[cfg(test)]
#[path = "cleaner_tests.rs"]
mod tests;
