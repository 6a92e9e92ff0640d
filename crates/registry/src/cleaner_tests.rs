use super::*;
use crate::worker::WorkerHandle;
use slae_core::FakeClock;
use std::process::Stdio;
use tokio::process::Command;

async fn fixture_map() -> (Arc<ConcurrentMap<JobId, Arc<JobRecord>>>, JobId, Arc<JobRecord>) {
    let mut command = Command::new("true");
    command.stdin(Stdio::null()).stdout(Stdio::null());
    let child = command.spawn().expect("spawn true");
    let pid = child.id().expect("pid");
    let worker = WorkerHandle::for_test(child, pid);

    let (_tx, rx) = tokio::sync::oneshot::channel();
    let id = JobId::new("job-1");
    let record = Arc::new(JobRecord::new(worker, rx, std::time::Instant::now(), 0));
    let map: Arc<ConcurrentMap<JobId, Arc<JobRecord>>> = Arc::new(ConcurrentMap::new());
    map.put(id.clone(), Arc::clone(&record));
    (map, id, record)
}

async fn wait_dead(record: &JobRecord) {
    for _ in 0..50 {
        if !record.worker().is_alive() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn evicts_delivered_terminal_job_whose_worker_has_exited() {
    let (map, id, record) = fixture_map().await;
    wait_dead(&record).await;
    record.with_state(|state| {
        state.status = JobStatus::Done;
        state.end_time = Some(Instant::now());
        state.delivered = true;
    });

    let clock = FakeClock::new();
    handle_job(&map, &id, &record, &clock, Duration::from_secs(600), Duration::from_secs(300)).await;

    assert_eq!(map.size(), 0);
}

#[tokio::test]
async fn retains_undelivered_terminal_job_within_ttl() {
    let (map, id, record) = fixture_map().await;
    wait_dead(&record).await;
    record.with_state(|state| {
        state.status = JobStatus::Done;
        state.end_time = Some(Instant::now());
        state.delivered = false;
    });

    let clock = FakeClock::new();
    handle_job(&map, &id, &record, &clock, Duration::from_secs(600), Duration::from_secs(300)).await;

    assert_eq!(map.size(), 1);
}

#[tokio::test]
async fn evicts_undelivered_terminal_job_past_ttl() {
    let (map, id, record) = fixture_map().await;
    wait_dead(&record).await;
    let clock = FakeClock::new();
    record.with_state(|state| {
        state.status = JobStatus::Done;
        state.end_time = Some(clock.now());
        state.delivered = false;
    });

    clock.advance(Duration::from_secs(301));
    handle_job(&map, &id, &record, &clock, Duration::from_secs(600), Duration::from_secs(300)).await;

    assert_eq!(map.size(), 0);
}

#[tokio::test]
async fn times_out_a_long_running_job_and_terminates_its_worker() {
    let mut command = Command::new("sleep");
    command.arg("30").stdin(Stdio::null()).stdout(Stdio::null());
    let child = command.spawn().expect("spawn sleep");
    let pid = child.id().expect("pid");
    let worker = WorkerHandle::for_test(child, pid);
    let (_tx, rx) = tokio::sync::oneshot::channel();

    let clock = FakeClock::new();
    let id = JobId::new("job-timeout");
    let record = Arc::new(JobRecord::new(worker, rx, clock.now(), clock.epoch_ms()));
    let map: Arc<ConcurrentMap<JobId, Arc<JobRecord>>> = Arc::new(ConcurrentMap::new());
    map.put(id.clone(), Arc::clone(&record));

    clock.advance(Duration::from_secs(601));
    handle_job(&map, &id, &record, &clock, Duration::from_secs(600), Duration::from_secs(300)).await;

    let snap = record.snapshot();
    assert_eq!(snap.status, JobStatus::Error);
    assert_eq!(snap.message, format!("Timeout for job {id}"));
    assert!(!record.worker().is_alive());
    // still in the map — eviction happens on a later cleaner pass
    assert_eq!(map.size(), 1);
}
