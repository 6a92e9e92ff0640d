// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Service`: the three request/response operations in front of a
//! [`Registry`]. Decline-reason strings are kept stable wire-contract
//! text so a client written against them sees exact wording across
//! releases.

use std::sync::Arc;

use slae_core::{Clock, JobId, JobStatus, SolverMethod, SystemClock};
use slae_registry::{JobRecord, Registry};
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::progress;
use crate::request::SubmitJobRequest;
use crate::response::{CancelResponse, StatusResponse, SubmitResponse};

/// Thin wrapper around `Arc<Registry>`. Cheap to clone; every operation
/// may be called concurrently from many request-serving tasks.
#[derive(Clone)]
pub struct Service<C: Clock = SystemClock> {
    registry: Arc<Registry<C>>,
}

impl<C: Clock + 'static> Service<C> {
    pub fn new(registry: Arc<Registry<C>>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<Registry<C>> {
        &self.registry
    }

    /// Validates the job id and method, spawns an isolated worker, and
    /// records the job as in progress. Declines without spawning a worker
    /// if the id is invalid, already in use, or the method is unknown.
    pub async fn submit_job(&self, request: SubmitJobRequest) -> SubmitResponse {
        let job_id = match JobId::parse(request.job_id.clone()) {
            Ok(id) => id,
            Err(_) => return SubmitResponse::declined(JobId::new(request.job_id), "Job id is invalid: empty or null"),
        };

        if self.registry.contains(&job_id) {
            return SubmitResponse::declined(job_id, "Job already submitted");
        }

        let method = match request.method.parse::<SolverMethod>() {
            Ok(method) => method,
            Err(err) => return SubmitResponse::declined(job_id, err.to_string()),
        };

        let input = slae_registry::WorkerInput { method, matrix: request.matrix, rhs: request.rhs };

        let (worker, result_rx) = match self.registry.spawn_worker(&input).await.map_err(ServiceError::from) {
            Ok(pair) => pair,
            Err(err) => {
                warn!(job_id = %job_id, error = %err, "failed to spawn worker for submitted job");
                return SubmitResponse::declined(job_id, format!("Failed to start worker: {err}"));
            }
        };

        let clock = self.registry.clock();
        let record = Arc::new(JobRecord::new(worker, result_rx, clock.now(), clock.epoch_ms()));
        self.registry.insert(job_id.clone(), record);
        info!(job_id = %job_id, "job submitted");

        SubmitResponse::completed(job_id)
    }

    /// Cancels a job that is still in progress, terminating its worker.
    /// Declines if the id is unknown or the job has already reached a
    /// terminal status.
    pub async fn cancel_job(&self, job_id: impl Into<String>) -> CancelResponse {
        let job_id = job_id.into();
        if job_id.is_empty() {
            return CancelResponse::declined(JobId::new(job_id), "Job id is empty");
        }
        let job_id = JobId::new(job_id);

        let Some(record) = self.registry.get(&job_id) else {
            return CancelResponse::declined(
                job_id,
                format!("Job {job_id} is not found. Total active jobs count: {}", self.registry.active_count()),
            );
        };

        let current_status = record.with_state(|state| {
            if state.status != JobStatus::InProgress {
                return Err(state.status);
            }
            let now = self.registry.clock().now();
            state.status = JobStatus::Cancelled;
            state.message = "Cancelled by request".to_string();
            state.end_time = Some(now);
            state.end_epoch_ms = Some(self.registry.clock().epoch_ms());
            Ok(())
        });

        match current_status {
            Err(status) => {
                CancelResponse::declined(job_id, format!("Job {job_id} is not in IN_PROGRESS state. Job status is {status}"))
            }
            Ok(()) => {
                record.worker().terminate().await;
                info!(job_id = %job_id, "job cancelled");
                CancelResponse::completed(job_id)
            }
        }
    }

    /// Reports a job's current status, progress, and (once terminal) its
    /// solution or failure message. Marks the record delivered on every
    /// terminal observation, not just the first.
    pub async fn get_job_status(&self, job_id: impl Into<String>) -> StatusResponse {
        let job_id = job_id.into();
        if job_id.is_empty() {
            return StatusResponse::declined(JobId::new(job_id), "Job id is empty");
        }
        let job_id = JobId::new(job_id);

        let Some(record) = self.registry.get(&job_id) else {
            return StatusResponse::declined(
                job_id,
                format!("Job {job_id} is not found. Total active jobs count: {}", self.registry.active_count()),
            );
        };

        let snapshot = record.with_state(|state| {
            if state.status.is_terminal() {
                state.delivered = true;
            }
            state.clone()
        });

        let now = self.registry.clock().now();
        let progress = progress::compute(
            snapshot.status,
            now,
            snapshot.start_time,
            self.registry.config().job_timeout,
        );

        StatusResponse::completed(
            job_id,
            snapshot.start_epoch_ms,
            Some(snapshot.end_epoch_ms.unwrap_or_else(|| self.registry.clock().epoch_ms())),
            progress,
            snapshot.status,
            snapshot.solution,
            snapshot.message,
        )
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
