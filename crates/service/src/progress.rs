// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress percentage shown to clients in `GetJobStatus`.

use slae_core::JobStatus;
use std::time::{Duration, Instant};

/// `DONE` -> 100, in-progress -> a clamped linear estimate against
/// `job_timeout`, terminal failure/cancel -> a fixed 70 ("mostly done,
/// didn't finish cleanly").
pub fn compute(status: JobStatus, now: Instant, start_time: Instant, job_timeout: Duration) -> u8 {
    match status {
        JobStatus::Done => 100,
        JobStatus::Error | JobStatus::Cancelled => 70,
        JobStatus::InProgress => {
            let timeout_secs = job_timeout.as_secs_f64();
            if timeout_secs <= 0.0 {
                return 0;
            }
            let elapsed_secs = now.saturating_duration_since(start_time).as_secs_f64();
            let pct = (elapsed_secs / timeout_secs * 100.0).floor();
            pct.clamp(0.0, 99.0) as u8
        }
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
