// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response envelopes returned by the three service operations.
//!
//! Every operation returns `{ requestStatus, requestStatusDetails, jobId,
//! ... }`. Job-data fields are `None` on a `Declined` response — the
//! operation never mutated the registry, so there is nothing to report
//! beyond the decline reason.

use serde::{Deserialize, Serialize};
use slae_core::{JobId, JobStatus, RequestStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub request_status: RequestStatus,
    pub request_status_details: String,
    pub job_id: JobId,
}

impl SubmitResponse {
    pub fn completed(job_id: JobId) -> Self {
        Self {
            request_status: RequestStatus::Completed,
            request_status_details: format!("Successfully submitted job {job_id}"),
            job_id,
        }
    }

    pub fn declined(job_id: JobId, details: impl Into<String>) -> Self {
        Self { request_status: RequestStatus::Declined, request_status_details: details.into(), job_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub request_status: RequestStatus,
    pub request_status_details: String,
    pub job_id: JobId,
}

impl CancelResponse {
    pub fn completed(job_id: JobId) -> Self {
        Self {
            request_status: RequestStatus::Completed,
            request_status_details: "Cancelled by request".to_string(),
            job_id,
        }
    }

    pub fn declined(job_id: JobId, details: impl Into<String>) -> Self {
        Self { request_status: RequestStatus::Declined, request_status_details: details.into(), job_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub request_status: RequestStatus,
    pub request_status_details: String,
    pub job_id: JobId,
    pub start_time_epoch_ms: Option<u64>,
    pub end_time_epoch_ms: Option<u64>,
    pub progress: Option<u8>,
    pub status: Option<JobStatus>,
    pub solution: Vec<f64>,
    pub message: Option<String>,
}

impl StatusResponse {
    #[allow(clippy::too_many_arguments)]
    pub fn completed(
        job_id: JobId,
        start_time_epoch_ms: u64,
        end_time_epoch_ms: Option<u64>,
        progress: u8,
        status: JobStatus,
        solution: Vec<f64>,
        message: String,
    ) -> Self {
        Self {
            request_status: RequestStatus::Completed,
            request_status_details: "Successfully retrieved job status".to_string(),
            job_id,
            start_time_epoch_ms: Some(start_time_epoch_ms),
            end_time_epoch_ms,
            progress: Some(progress),
            status: Some(status),
            solution,
            message: Some(message),
        }
    }

    pub fn declined(job_id: JobId, details: impl Into<String>) -> Self {
        Self {
            request_status: RequestStatus::Declined,
            request_status_details: details.into(),
            job_id,
            start_time_epoch_ms: None,
            end_time_epoch_ms: None,
            progress: None,
            status: None,
            solution: Vec::new(),
            message: None,
        }
    }
}
