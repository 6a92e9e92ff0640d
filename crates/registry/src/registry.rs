// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `Registry`: process-wide job table plus watcher/cleaner lifecycle.
//!
//! Constructed once by the daemon's `main` and held in an `Arc`, never a
//! global/static — process-wide uniqueness is an invariant enforced by
//! the caller, not a language-level mechanism.

use crate::cleaner;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, WorkerError};
use crate::map::ConcurrentMap;
use crate::record::JobRecord;
use crate::watcher;
use crate::wire::{WorkerInput, WorkerOutcome};
use parking_lot::Mutex;
use slae_core::{Clock, JobId, SystemClock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Bound on how long `stop()` waits for each background task to notice
/// cancellation before giving up on joining it.
const SHUTDOWN_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

pub type JobMap = ConcurrentMap<JobId, Arc<JobRecord>>;

pub struct Registry<C: Clock = SystemClock> {
    map: Arc<JobMap>,
    config: RegistryConfig,
    clock: C,
    started: AtomicBool,
    cancel: Mutex<Option<CancellationToken>>,
    tasks: Mutex<Option<(JoinHandle<()>, JoinHandle<()>)>>,
}

impl<C: Clock + 'static> Registry<C> {
    pub fn new(config: RegistryConfig, clock: C) -> Self {
        Self {
            map: Arc::new(ConcurrentMap::new()),
            config,
            clock,
            started: AtomicBool::new(false),
            cancel: Mutex::new(None),
            tasks: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    pub fn active_count(&self) -> usize {
        self.map.size()
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.map.contains(id)
    }

    pub fn get(&self, id: &JobId) -> Option<Arc<JobRecord>> {
        self.map.get(id)
    }

    pub fn insert(&self, id: JobId, record: Arc<JobRecord>) {
        self.map.put(id, record);
    }

    /// Spawn an isolated worker for one job. Does not touch the map — the
    /// caller inserts the resulting `JobRecord` itself, after checking the
    /// submission preconditions.
    pub async fn spawn_worker(
        &self,
        input: &WorkerInput,
    ) -> Result<(crate::worker::WorkerHandle, oneshot::Receiver<WorkerOutcome>), WorkerError> {
        crate::worker::spawn(&self.config.worker_bin, input).await
    }

    /// Idempotent. Clears `active`, then spawns the watcher and cleaner.
    pub fn start(&self) -> Result<(), RegistryError> {
        if self.started.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err()
        {
            return Ok(());
        }

        self.map.clear();
        let cancel = CancellationToken::new();

        let watcher_handle = tokio::spawn(watcher::run(
            Arc::clone(&self.map),
            self.clock.clone(),
            self.config.poll_interval,
            cancel.clone(),
        ));
        let cleaner_handle = tokio::spawn(cleaner::run(
            Arc::clone(&self.map),
            self.clock.clone(),
            self.config.job_timeout,
            self.config.result_ttl,
            self.config.poll_interval,
            cancel.clone(),
        ));

        *self.cancel.lock() = Some(cancel);
        *self.tasks.lock() = Some((watcher_handle, cleaner_handle));
        info!("registry started");
        Ok(())
    }

    /// Idempotent. Signals both loops, joins them with a bounded timeout,
    /// then drains and terminates every remaining worker.
    pub async fn stop(&self) {
        if self.started.compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst).is_err()
        {
            return;
        }

        let cancel = self.cancel.lock().take();
        if let Some(cancel) = cancel {
            cancel.cancel();
        }

        let tasks = self.tasks.lock().take();
        if let Some((watcher_handle, cleaner_handle)) = tasks {
            if tokio::time::timeout(SHUTDOWN_JOIN_TIMEOUT, watcher_handle).await.is_err() {
                warn!("watcher loop did not stop within shutdown timeout");
            }
            if tokio::time::timeout(SHUTDOWN_JOIN_TIMEOUT, cleaner_handle).await.is_err() {
                warn!("cleaner loop did not stop within shutdown timeout");
            }
        }

        for id in self.map.keys() {
            if let Some(record) = self.map.pop(&id) {
                record.worker().terminate().await;
                record.close_result_channel();
            }
        }
        info!("registry stopped");
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
