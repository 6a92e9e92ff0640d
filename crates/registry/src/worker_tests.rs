use super::*;
use crate::wire::WorkerInput;
use slae_core::{JobStatus, SolverMethod};
use std::fs;
use std::os::unix::fs::PermissionsExt;

fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    let mut perms = fs::metadata(&path).expect("stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod script");
    path
}

#[tokio::test]
async fn spawn_reads_back_worker_outcome() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write_script(
        dir.path(),
        "echo.sh",
        r#"read -r _line
echo '{"status":"DONE","solution":[2.4,1.4],"message":"Solved"}'"#,
    );

    let input = WorkerInput {
        method: SolverMethod::NumpyExact,
        matrix: vec![vec![3.0, 2.0], vec![1.0, 4.0]],
        rhs: vec![10.0, 8.0],
    };
    let (handle, rx) = spawn(&script, &input).await.expect("spawn worker");
    let outcome = rx.await.expect("worker sends outcome");
    assert_eq!(outcome.status, JobStatus::Done);
    assert_eq!(outcome.solution, vec![2.4, 1.4]);

    for _ in 0..50 {
        if !handle.is_alive() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(!handle.is_alive());
}

#[tokio::test]
async fn channel_closes_without_message_when_worker_dies_silently() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = write_script(dir.path(), "die.sh", "exit 1");

    let input = WorkerInput { method: SolverMethod::NumpyExact, matrix: vec![vec![1.0]], rhs: vec![1.0] };
    let (_handle, rx) = spawn(&script, &input).await.expect("spawn worker");
    assert!(rx.await.is_err());
}

#[tokio::test]
async fn terminate_kills_a_running_process() {
    let mut command = Command::new("sleep");
    command.arg("30").stdin(Stdio::null()).stdout(Stdio::null());
    let child = command.spawn().expect("spawn sleep");
    let pid = child.id().expect("pid");
    let handle = WorkerHandle::for_test(child, pid);

    assert!(handle.is_alive());
    handle.terminate().await;
    assert!(!handle.is_alive());
}

#[tokio::test]
async fn terminate_is_idempotent() {
    let mut command = Command::new("sleep");
    command.arg("30").stdin(Stdio::null()).stdout(Stdio::null());
    let child = command.spawn().expect("spawn sleep");
    let pid = child.id().expect("pid");
    let handle = WorkerHandle::for_test(child, pid);

    handle.terminate().await;
    handle.terminate().await;
    assert!(!handle.is_alive());
}
