// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the quad rental system.
//!
//! This crate provides `SQLite` persistence for the three rental tables
//! (quads, reservations and helmet associations) on top of Diesel with
//! embedded migrations.
//!
//! ## Shape
//!
//! - [`Store`] is the explicitly-constructed handle: one connection, one
//!   change bus, no global state. Repositories receive an `Arc<Store>`.
//! - `mutations/` and `queries/` hold the Diesel DSL; the store wraps them
//!   and publishes a [`StoreEvent`] after each committed write so
//!   observable queries refresh without a manual notion of refresh.
//! - The booking core lives here too: the overlap-counting query and the
//!   transactional reservation+helmet writer
//!   ([`Store::save_reserva_con_cascos`]).
//!
//! ## Integrity
//!
//! Foreign keys cascade deletes from quads and reservations into the
//! helmet table; `PRAGMA foreign_keys` is enabled and verified at store
//! construction. Every helmet write enforces the seat-count bound of the
//! referenced quad.

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

mod diesel_schema;
mod error;
mod events;
mod mutations;
mod queries;
mod sqlite;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use events::{EVENT_BUFFER_SIZE, StoreBus, StoreEvent, Table};
pub use store::Store;
