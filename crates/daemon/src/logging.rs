// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup: a compact `tracing` formatter on stderr, filtered by
//! `RUST_LOG` (default `info`). No file rotation or state directory —
//! this core has nowhere durable to write logs to, so it only installs
//! a subscriber and leaves shipping/rotation to the deployment.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Safe to call once per process;
/// a second call is a no-op (the underlying `set_global_default` failure
/// is swallowed, matching how short-lived test binaries call this
/// repeatedly across the suite).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
