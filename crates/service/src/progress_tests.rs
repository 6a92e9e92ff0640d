use super::*;

#[test]
fn done_is_always_100() {
    let now = Instant::now();
    assert_eq!(compute(JobStatus::Done, now, now, Duration::from_secs(600)), 100);
}

#[test]
fn error_and_cancelled_are_70() {
    let now = Instant::now();
    assert_eq!(compute(JobStatus::Error, now, now, Duration::from_secs(600)), 70);
    assert_eq!(compute(JobStatus::Cancelled, now, now, Duration::from_secs(600)), 70);
}

#[test]
fn in_progress_is_zero_at_submission() {
    let now = Instant::now();
    assert_eq!(compute(JobStatus::InProgress, now, now, Duration::from_secs(600)), 0);
}

#[test]
fn in_progress_clamps_just_under_100_near_timeout() {
    let start = Instant::now();
    let job_timeout = Duration::from_secs(600);
    let now = start + job_timeout - Duration::from_millis(1);
    let progress = compute(JobStatus::InProgress, now, start, job_timeout);
    assert_eq!(progress, 99);
}

#[test]
fn in_progress_never_reports_100_even_past_timeout() {
    let start = Instant::now();
    let job_timeout = Duration::from_secs(600);
    let now = start + job_timeout * 2;
    let progress = compute(JobStatus::InProgress, now, start, job_timeout);
    assert_eq!(progress, 99);
}
