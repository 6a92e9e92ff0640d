// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Odd Jobs-style SLAE dispatcher daemon (`slaed`).
//!
//! Wires configuration, logging, and the registry/service pair together.
//! No transport layer is opened here — remote-procedure framing, HTTP
//! upload parsing, and message-queue plumbing are external collaborators
//! this core doesn't own. `main` demonstrates the lifecycle end to end
//! (start, submit a smoke job through the `Service` API directly, log
//! its outcome) and then blocks on `SIGINT`/`SIGTERM` to drive a clean
//! `stop()`.

use std::sync::Arc;

use slae_registry::{Registry, RegistryConfig};
use slae_service::{Service, SubmitJobRequest};
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{sleep, Duration};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("slaed {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("slaed {}", env!("CARGO_PKG_VERSION"));
                println!("SLAE job dispatcher daemon — job lifecycle engine core.");
                return Ok(());
            }
            other => {
                eprintln!("error: unexpected argument '{other}'");
                eprintln!("Usage: slaed [--help | --version]");
                std::process::exit(1);
            }
        }
    }

    slae_daemon::logging::init();

    let config = RegistryConfig {
        job_timeout: slae_daemon::env::job_timeout(),
        result_ttl: slae_daemon::env::result_ttl(),
        poll_interval: slae_daemon::env::poll_interval(),
        worker_bin: slae_daemon::env::worker_bin(),
    };

    let registry = Arc::new(Registry::new(config, slae_core::SystemClock));
    registry.start()?;
    info!("registry started");

    let service = Service::new(Arc::clone(&registry));
    run_smoke_job(&service).await;

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!("slaed ready");
    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
        _ = sigint.recv() => info!("received SIGINT, shutting down"),
    }

    registry.stop().await;
    info!("slaed stopped");
    Ok(())
}

/// Submits one hard-coded job through the `Service` API and polls
/// `GetJobStatus` until it reaches a terminal state, demonstrating the
/// submit -> watch -> deliver lifecycle the registry implements.
async fn run_smoke_job(service: &Service) {
    let request = SubmitJobRequest {
        job_id: "startup-smoke-test".to_string(),
        method: "numpy_exact".to_string(),
        matrix: vec![vec![3.0, 2.0], vec![1.0, 4.0]],
        rhs: vec![10.0, 8.0],
    };

    let submitted = service.submit_job(request).await;
    if submitted.request_status != slae_core::RequestStatus::Completed {
        error!(details = %submitted.request_status_details, "smoke job submission was declined");
        return;
    }

    for _ in 0..50 {
        let status = service.get_job_status("startup-smoke-test").await;
        if status.status.is_some_and(|s| s.is_terminal()) {
            info!(
                status = ?status.status,
                message = status.message.as_deref().unwrap_or(""),
                "smoke job finished"
            );
            return;
        }
        sleep(Duration::from_millis(50)).await;
    }
    error!("smoke job did not finish within the startup window");
}
