// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The isolated worker process: spawn, result collection, termination.

use crate::error::WorkerError;
use crate::wire::{WorkerInput, WorkerOutcome};
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use parking_lot::Mutex;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tokio::sync::oneshot;

/// How long `terminate()` waits for a graceful exit after `SIGTERM` before
/// escalating to `SIGKILL`.
const TERMINATE_GRACE: Duration = Duration::from_millis(500);
const TERMINATE_POLL: Duration = Duration::from_millis(20);

/// Handle to one isolated worker process.
///
/// `is_alive`/`exit_code` reap via `try_wait`, never blocking. `terminate`
/// is idempotent and safe to call from both the cancel path and the cleaner.
pub struct WorkerHandle {
    child: Mutex<Child>,
    pid: u32,
}

impl WorkerHandle {
    pub fn pid(&self) -> u32 {
        self.pid
    }

    #[cfg(test)]
    pub(crate) fn for_test(child: Child, pid: u32) -> Self {
        Self { child: Mutex::new(child), pid }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.child.lock().try_wait(), Ok(None))
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.child.lock().try_wait().ok().flatten().and_then(|status| status.code())
    }

    /// Send `SIGTERM`, wait a short grace period, then escalate to
    /// `SIGKILL` if the process is still alive. Safe to call repeatedly.
    pub async fn terminate(&self) {
        let _ = signal::kill(Pid::from_raw(self.pid as i32), Signal::SIGTERM);

        let deadline = tokio::time::Instant::now() + TERMINATE_GRACE;
        while tokio::time::Instant::now() < deadline {
            if !self.is_alive() {
                return;
            }
            tokio::time::sleep(TERMINATE_POLL).await;
        }

        if self.is_alive() {
            let _ = self.child.lock().start_kill();
        }
    }
}

/// Spawn `worker_bin`, write one JSON [`WorkerInput`] line to its stdin and
/// close it, and hand back a handle plus the receiving end of the
/// one-shot result channel.
pub async fn spawn(
    worker_bin: &Path,
    input: &WorkerInput,
) -> Result<(WorkerHandle, oneshot::Receiver<WorkerOutcome>), WorkerError> {
    let mut command = Command::new(worker_bin);
    command.stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::null());

    let mut child = command.spawn().map_err(WorkerError::Spawn)?;
    let pid = child.id().ok_or(WorkerError::MissingPipe)?;
    let mut stdin = child.stdin.take().ok_or(WorkerError::MissingPipe)?;
    let stdout = child.stdout.take().ok_or(WorkerError::MissingPipe)?;

    let mut payload = serde_json::to_vec(input).map_err(|e| {
        WorkerError::WriteStdin(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    payload.push(b'\n');

    // Written on its own task so a large matrix can't stall the submitting
    // caller on a full pipe buffer; the pipe closes when `stdin` drops.
    tokio::spawn(async move {
        let _ = stdin.write_all(&payload).await;
    });

    let (tx, rx) = oneshot::channel();
    tokio::spawn(read_outcome(stdout, tx));

    Ok((WorkerHandle { child: Mutex::new(child), pid }, rx))
}

/// Read at most one line from the worker's stdout and forward it as a
/// [`WorkerOutcome`]. EOF with nothing parseable drops `tx` without
/// sending — the watcher treats that the same as any other worker death.
async fn read_outcome(stdout: ChildStdout, tx: oneshot::Sender<WorkerOutcome>) {
    let mut reader = BufReader::new(stdout);
    let mut line = String::new();
    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
        return;
    }
    if let Ok(outcome) = serde_json::from_str::<WorkerOutcome>(line.trim_end()) {
        let _ = tx.send(outcome);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
