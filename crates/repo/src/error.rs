// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Reasons a caller stopped waiting for a submitted write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WaitError {
    /// The wait bound elapsed. The write was not cancelled and may still
    /// complete afterwards; the caller must treat the operation as failed
    /// regardless.
    #[error("timed out waiting for the write to complete (it may still land later)")]
    Timeout,

    /// The worker executing the job disappeared before sending a result.
    #[error("the write executor dropped the job before completing it")]
    Disconnected,
}
