// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository boundary layer for the quad rental system.
//!
//! This crate is the surface a UI layer talks to. It wraps the
//! persistence [`Store`](quadrent_persistence::Store) with:
//!
//! - a bounded [`WriteExecutor`]: four worker threads run the blocking
//!   storage calls so the caller's thread never does, and callers wait on
//!   a result with a 15 s bound;
//! - sentinel-value CRUD methods: no repository operation panics or
//!   returns `Result`; validation failures and not-found report 0 or -1
//!   exactly as documented per method, with the cause logged;
//! - [`LiveQuery`] handles: observable queries that are told to refresh
//!   whenever a committed write touches one of their tables;
//! - the blocking, fail-closed overlap check and the fire-and-forget
//!   reservation+helmet save.
//!
//! ## Timeouts are not cancellation
//!
//! A caller that stops waiting after [`WRITE_TIMEOUT`] must treat the
//! operation as failed, but the underlying write keeps running and may
//! still land afterwards. No compensating action exists.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cascos;
mod error;
mod executor;
mod live;
mod quads;
mod reservas;

#[cfg(test)]
mod tests;

pub use cascos::CascoRepository;
pub use error::WaitError;
pub use executor::{Pending, WRITE_TIMEOUT, WriteExecutor};
pub use live::LiveQuery;
pub use quads::QuadRepository;
pub use reservas::ReservaRepository;
