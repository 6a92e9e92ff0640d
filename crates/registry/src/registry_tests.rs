use super::*;
use crate::worker::WorkerHandle;
use slae_core::{FakeClock, JobId};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

fn config() -> RegistryConfig {
    RegistryConfig {
        job_timeout: Duration::from_secs(600),
        result_ttl: Duration::from_secs(300),
        poll_interval: Duration::from_millis(20),
        worker_bin: PathBuf::from("slae-worker"),
    }
}

async fn sleeping_record() -> Arc<JobRecord> {
    let mut command = Command::new("sleep");
    command.arg("30").stdin(Stdio::null()).stdout(Stdio::null());
    let child = command.spawn().expect("spawn sleep");
    let pid = child.id().expect("pid");
    let worker = WorkerHandle::for_test(child, pid);
    let (_tx, rx) = oneshot::channel();
    Arc::new(JobRecord::new(worker, rx, std::time::Instant::now(), 0))
}

#[tokio::test]
async fn start_is_idempotent() {
    let registry = Registry::new(config(), FakeClock::new());
    registry.start().expect("start");
    assert!(registry.is_running());
    registry.start().expect("second start is a no-op");
    assert!(registry.is_running());
    registry.stop().await;
}

#[tokio::test]
async fn stop_is_idempotent() {
    let registry = Registry::new(config(), FakeClock::new());
    registry.start().expect("start");
    registry.stop().await;
    assert!(!registry.is_running());
    registry.stop().await;
    assert!(!registry.is_running());
}

#[tokio::test]
async fn stop_drains_and_terminates_remaining_workers() {
    let registry = Registry::new(config(), FakeClock::new());
    registry.start().expect("start");

    let record = sleeping_record().await;
    let worker = Arc::clone(&record);
    registry.insert(JobId::new("job-1"), record);
    assert_eq!(registry.active_count(), 1);

    registry.stop().await;

    assert_eq!(registry.active_count(), 0);
    assert!(!worker.worker().is_alive());
}

#[tokio::test]
async fn insert_and_get_round_trip() {
    let registry = Registry::new(config(), FakeClock::new());
    let id = JobId::new("job-1");
    let record = sleeping_record().await;
    registry.insert(id.clone(), Arc::clone(&record));

    assert!(registry.contains(&id));
    assert!(registry.get(&id).is_some());
    assert_eq!(registry.active_count(), 1);

    record.worker().terminate().await;
}
