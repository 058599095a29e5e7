// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quad catalog repository.

use std::sync::Arc;
use tracing::{debug, warn};

use quadrent_domain::{Quad, QuadOrder, validate_quad};
use quadrent_persistence::{Store, Table};

use crate::executor::WriteExecutor;
use crate::live::LiveQuery;

/// Sentinel-value CRUD surface over the quad catalog.
///
/// Writes run on the shared [`WriteExecutor`]; the caller blocks at most
/// [`WRITE_TIMEOUT`](crate::WRITE_TIMEOUT) per operation. No method
/// panics or returns `Result`: failures come back as the documented
/// sentinel, with the cause logged.
pub struct QuadRepository {
    store: Arc<Store>,
    executor: Arc<WriteExecutor>,
}

impl QuadRepository {
    /// Creates a repository over the given store and executor.
    #[must_use]
    pub const fn new(store: Arc<Store>, executor: Arc<WriteExecutor>) -> Self {
        Self { store, executor }
    }

    /// Inserts a quad.
    ///
    /// Returns the inserted row ID, or -1 when validation fails, the
    /// plate already exists, the write errors, or the wait times out.
    pub fn insert(&self, quad: Quad) -> i64 {
        if let Err(err) = validate_quad(&quad) {
            debug!(%err, "Rejected quad insert");
            return -1;
        }

        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.insert_quad(&quad));
        match pending.wait() {
            Ok(Ok(rowid)) => rowid,
            Ok(Err(err)) => {
                warn!(%err, "Quad insert failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Quad insert did not complete in time");
                -1
            }
        }
    }

    /// Updates a quad identified by its plate.
    ///
    /// Returns the number of rows changed: 1 on success, 0 when
    /// validation fails or no quad carries that plate, -1 when the write
    /// errors or the wait times out.
    pub fn update(&self, quad: Quad) -> i64 {
        if let Err(err) = validate_quad(&quad) {
            debug!(%err, "Rejected quad update");
            return 0;
        }

        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.update_quad(&quad));
        match pending.wait() {
            Ok(Ok(rows)) => i64::try_from(rows).unwrap_or(i64::MAX),
            Ok(Err(err)) => {
                warn!(%err, "Quad update failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Quad update did not complete in time");
                -1
            }
        }
    }

    /// Deletes a quad by plate, cascading to its helmet rows.
    ///
    /// Returns the number of rows deleted: 1 on success, 0 when the plate
    /// is empty or unknown, -1 when the write errors or the wait times
    /// out.
    pub fn delete(&self, matricula: &str) -> i64 {
        if matricula.is_empty() {
            return 0;
        }

        let store = Arc::clone(&self.store);
        let matricula = matricula.to_owned();
        let pending = self.executor.submit(move || store.delete_quad(&matricula));
        match pending.wait() {
            Ok(Ok(rows)) => i64::try_from(rows).unwrap_or(i64::MAX),
            Ok(Err(err)) => {
                warn!(%err, "Quad delete failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Quad delete did not complete in time");
                -1
            }
        }
    }

    /// Observable list of every quad, ordered by plate.
    #[must_use]
    pub fn all_quads(&self) -> LiveQuery<Vec<Quad>> {
        self.ordered_quads(QuadOrder::Matricula)
    }

    /// Observable list of every quad, sorted by the given field.
    #[must_use]
    pub fn ordered_quads(&self, order: QuadOrder) -> LiveQuery<Vec<Quad>> {
        LiveQuery::new(Arc::clone(&self.store), &[Table::Quads], move |store| {
            store.ordered_quads(order)
        })
    }

    /// Observable lookup of one quad by plate.
    #[must_use]
    pub fn quad_by_matricula(&self, matricula: &str) -> LiveQuery<Option<Quad>> {
        let matricula = matricula.to_owned();
        LiveQuery::new(Arc::clone(&self.store), &[Table::Quads], move |store| {
            store.quad_by_matricula(&matricula)
        })
    }
}
