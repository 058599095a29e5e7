// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bounded worker pool for blocking storage calls.
//!
//! Writes are dispatched to a small fixed pool so the caller's thread is
//! never blocked by storage I/O for long. A caller that needs the outcome
//! waits on the [`Pending`] handle with a bounded timeout; one that does
//! not (fire-and-forget) just submits and moves on.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::warn;

use crate::error::WaitError;

/// Fixed size of the worker pool.
const NUMBER_OF_WORKERS: usize = 4;

/// How long callers wait for a submitted write before giving up.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(15);

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed-size worker pool draining a shared job queue.
///
/// Dropping the executor closes the queue; workers finish the jobs
/// already queued and are joined.
pub struct WriteExecutor {
    sender: Option<mpsc::Sender<Job>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WriteExecutor {
    /// Creates the default four-worker pool.
    #[must_use]
    pub fn new() -> Self {
        Self::with_workers(NUMBER_OF_WORKERS)
    }

    /// Creates a pool with a custom worker count (minimum one).
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..workers.max(1))
            .map(|_| {
                let receiver = Arc::clone(&receiver);
                thread::spawn(move || worker_loop(&receiver))
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
        }
    }

    /// Enqueues a job without waiting for its outcome.
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender
            && sender.send(Box::new(job)).is_err()
        {
            warn!("write executor queue is closed; job dropped");
        }
    }

    /// Enqueues a job and returns a handle to wait for its result.
    pub fn submit<T, F>(&self, job: F) -> Pending<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.execute(move || {
            // The receiver may be gone if the caller already timed out;
            // the write itself still happened.
            let _ = tx.send(job());
        });
        Pending { receiver: rx }
    }
}

impl Default for WriteExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WriteExecutor {
    fn drop(&mut self) {
        // Closing the channel lets each worker drain the queue and exit.
        self.sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(receiver: &Arc<Mutex<mpsc::Receiver<Job>>>) {
    loop {
        let job = {
            let Ok(guard) = receiver.lock() else {
                return;
            };
            guard.recv()
        };
        match job {
            Ok(job) => job(),
            Err(_) => return,
        }
    }
}

/// Handle to the eventual result of a submitted job.
pub struct Pending<T> {
    receiver: mpsc::Receiver<T>,
}

impl<T> Pending<T> {
    /// Waits for the result with the default [`WRITE_TIMEOUT`] bound.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::Timeout`] when the bound elapses (the job is
    /// not cancelled) or [`WaitError::Disconnected`] when the worker died
    /// before delivering a result.
    pub fn wait(&self) -> Result<T, WaitError> {
        self.wait_timeout(WRITE_TIMEOUT)
    }

    /// Waits for the result with a caller-supplied bound.
    ///
    /// # Errors
    ///
    /// Same as [`Pending::wait`].
    pub fn wait_timeout(&self, timeout: Duration) -> Result<T, WaitError> {
        self.receiver.recv_timeout(timeout).map_err(|err| match err {
            RecvTimeoutError::Timeout => WaitError::Timeout,
            RecvTimeoutError::Disconnected => WaitError::Disconnected,
        })
    }
}
