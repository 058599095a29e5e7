// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write executor tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::{WaitError, WriteExecutor};

#[test]
fn test_submit_delivers_the_job_result() {
    let executor = WriteExecutor::new();
    let pending = executor.submit(|| 40 + 2);
    assert_eq!(pending.wait().expect("result"), 42);
}

#[test]
fn test_jobs_run_on_worker_threads_not_the_caller() {
    let executor = WriteExecutor::new();
    let caller = thread::current().id();
    let pending = executor.submit(move || thread::current().id() != caller);
    assert!(pending.wait().expect("result"));
}

#[test]
fn test_execute_is_fire_and_forget() {
    let executor = WriteExecutor::new();
    let (tx, rx) = mpsc::channel();
    executor.execute(move || {
        tx.send(()).expect("send");
    });
    rx.recv_timeout(Duration::from_secs(5)).expect("job ran");
}

#[test]
fn test_wait_timeout_reports_timeout_but_job_still_lands() {
    let executor = WriteExecutor::new();
    let (tx, rx) = mpsc::channel();
    let pending = executor.submit(move || {
        thread::sleep(Duration::from_millis(200));
        tx.send(()).expect("send");
        "done"
    });

    // Caller gives up long before the job finishes.
    assert_eq!(
        pending.wait_timeout(Duration::from_millis(10)),
        Err(WaitError::Timeout)
    );

    // Timeout is not cancellation: the write still completes.
    rx.recv_timeout(Duration::from_secs(5))
        .expect("job completed after the caller stopped waiting");
}

#[test]
fn test_all_queued_jobs_run_even_past_pool_width() {
    let executor = WriteExecutor::with_workers(2);
    let counter = Arc::new(AtomicUsize::new(0));

    let pendings: Vec<_> = (0..16)
        .map(|_| {
            let counter = Arc::clone(&counter);
            executor.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();
    for pending in pendings {
        pending.wait().expect("job ran");
    }
    assert_eq!(counter.load(Ordering::SeqCst), 16);
}

#[test]
fn test_drop_drains_queued_jobs() {
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let executor = WriteExecutor::with_workers(1);
        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            executor.execute(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        // Dropping closes the queue and joins the worker.
    }
    assert_eq!(counter.load(Ordering::SeqCst), 8);
}
