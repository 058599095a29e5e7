// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation repository.

use std::sync::Arc;
use tracing::{debug, warn};

use quadrent_domain::{Reserva, ReservaFilter, ReservaOrder, now_millis, validate_reserva};
use quadrent_persistence::{Store, Table};

use crate::executor::WriteExecutor;
use crate::live::LiveQuery;

/// Sentinel-value CRUD surface over the reservations.
pub struct ReservaRepository {
    store: Arc<Store>,
    executor: Arc<WriteExecutor>,
}

impl ReservaRepository {
    /// Creates a repository over the given store and executor.
    #[must_use]
    pub const fn new(store: Arc<Store>, executor: Arc<WriteExecutor>) -> Self {
        Self { store, executor }
    }

    /// Inserts a reservation.
    ///
    /// Returns the identifier assigned to it, or -1 when validation
    /// fails, the write errors, or the wait times out.
    pub fn insert(&self, reserva: Reserva) -> i64 {
        if let Err(err) = validate_reserva(&reserva) {
            debug!(%err, "Rejected reserva insert");
            return -1;
        }

        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.insert_reserva(&reserva));
        match pending.wait() {
            Ok(Ok(id_reserva)) => id_reserva,
            Ok(Err(err)) => {
                warn!(%err, "Reserva insert failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Reserva insert did not complete in time");
                -1
            }
        }
    }

    /// Updates a reservation identified by `id_reserva`.
    ///
    /// Returns the number of rows changed: 1 on success, 0 when
    /// validation fails or the identifier is unknown, -1 when the write
    /// errors or the wait times out.
    pub fn update(&self, reserva: Reserva) -> i64 {
        if let Err(err) = validate_reserva(&reserva) {
            debug!(%err, "Rejected reserva update");
            return 0;
        }

        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.update_reserva(&reserva));
        match pending.wait() {
            Ok(Ok(rows)) => i64::try_from(rows).unwrap_or(i64::MAX),
            Ok(Err(err)) => {
                warn!(%err, "Reserva update failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Reserva update did not complete in time");
                -1
            }
        }
    }

    /// Deletes a reservation, cascading to its helmet rows.
    ///
    /// Returns the number of rows deleted: 1 on success, 0 when the
    /// identifier is not positive or unknown, -1 when the write errors or
    /// the wait times out.
    pub fn delete(&self, id_reserva: i64) -> i64 {
        if id_reserva <= 0 {
            return 0;
        }

        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.delete_reserva(id_reserva));
        match pending.wait() {
            Ok(Ok(rows)) => i64::try_from(rows).unwrap_or(i64::MAX),
            Ok(Err(err)) => {
                warn!(%err, "Reserva delete failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Reserva delete did not complete in time");
                -1
            }
        }
    }

    /// Observable list of every reservation, ordered by client name.
    #[must_use]
    pub fn all_reservas(&self) -> LiveQuery<Vec<Reserva>> {
        self.ordered_reservas(ReservaOrder::NombreCliente, ReservaFilter::Todas)
    }

    /// Observable reservation list, sorted by the given field and
    /// filtered by temporal status.
    ///
    /// The filter is evaluated against the wall clock each time the query
    /// refreshes, so an ongoing reservation ages out of `Vigentes` on its
    /// own as time passes, but only observers re-fetching after a change
    /// signal will see that.
    #[must_use]
    pub fn ordered_reservas(
        &self,
        order: ReservaOrder,
        filter: ReservaFilter,
    ) -> LiveQuery<Vec<Reserva>> {
        LiveQuery::new(Arc::clone(&self.store), &[Table::Reservas], move |store| {
            store.ordered_reservas(order, filter, now_millis())
        })
    }

    /// Observable lookup of one reservation by identifier.
    #[must_use]
    pub fn reserva_by_id(&self, id_reserva: i64) -> LiveQuery<Option<Reserva>> {
        LiveQuery::new(Arc::clone(&self.store), &[Table::Reservas], move |store| {
            store.reserva_by_id(id_reserva)
        })
    }
}
