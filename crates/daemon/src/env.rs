// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate: one
//! free function per setting, each with a typed default so nothing
//! downstream has to know the variable name or parse a string itself.

use std::path::PathBuf;
use std::time::Duration;

/// Worker lifetime ceiling (`JOB_TIMEOUT`, default 600s).
pub fn job_timeout() -> Duration {
    std::env::var("SLAE_JOB_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(600))
}

/// Result retention after a terminal transition (`RESULT_TTL`, default
/// 300s).
pub fn result_ttl() -> Duration {
    std::env::var("SLAE_RESULT_TTL_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(300))
}

/// Watcher/cleaner pass cadence (default 200ms).
pub fn poll_interval() -> Duration {
    std::env::var("SLAE_POLL_INTERVAL_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(200))
}

/// Path to the `slae-worker` binary the registry spawns for each job.
/// Defaults to a sibling of the currently running executable, so `slaed`
/// finds its worker without requiring `$PATH` to be set up.
pub fn worker_bin() -> PathBuf {
    if let Ok(path) = std::env::var("SLAE_WORKER_BIN") {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("slae-worker")))
        .unwrap_or_else(|| PathBuf::from("slae-worker"))
}
