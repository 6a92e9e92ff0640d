// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `slae-worker`: the isolated per-job worker process. Reads one
//! [`WorkerInput`] JSON line from stdin, runs the named solver to
//! completion, writes exactly one [`WorkerOutcome`] JSON line to stdout,
//! and exits. Never retries; a crash before writing is how the
//! supervisor's watcher learns the job failed.

use std::io::{self, Read, Write};

use slae_registry::{WorkerInput, WorkerOutcome};

fn main() {
    slae_daemon::logging::init();

    let outcome = match read_input() {
        Ok(input) => run(input),
        Err(err) => WorkerOutcome::failed(format!("ValueError: failed to read job input: {err}")),
    };

    if let Err(err) = write_outcome(&outcome) {
        // Nothing left to do — the pipe is gone or malformed, and the
        // watcher will detect our exit without a message the same way it
        // detects any other worker death.
        eprintln!("slae-worker: failed to write outcome: {err}");
        std::process::exit(1);
    }
}

fn run(input: WorkerInput) -> WorkerOutcome {
    let solver = slae_solvers::lookup(input.method);
    match solver.solve(&input.matrix, &input.rhs) {
        Ok(solution) => WorkerOutcome::solved(solution),
        Err(err) => WorkerOutcome::failed(err.to_string()),
    }
}

fn read_input() -> io::Result<WorkerInput> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    serde_json::from_str(raw.trim_end()).map_err(io::Error::other)
}

fn write_outcome(outcome: &WorkerOutcome) -> io::Result<()> {
    let mut line = serde_json::to_vec(outcome)?;
    line.push(b'\n');
    io::stdout().write_all(&line)?;
    io::stdout().flush()
}
