// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Helmet association repository: the booking surface.
//!
//! Besides plain CRUD over association rows, this repository carries the
//! two booking operations: the blocking overlap check (fail closed) and
//! the fire-and-forget transactional save of a reservation together with
//! its helmet selection.

use std::sync::Arc;
use tracing::{debug, warn};

use quadrent_domain::{Casco, Reserva};
use quadrent_persistence::{Store, Table};

use crate::executor::WriteExecutor;
use crate::live::LiveQuery;

/// Sentinel-value CRUD surface over helmet associations, plus the booking
/// operations.
pub struct CascoRepository {
    store: Arc<Store>,
    executor: Arc<WriteExecutor>,
}

impl CascoRepository {
    /// Creates a repository over the given store and executor.
    #[must_use]
    pub const fn new(store: Arc<Store>, executor: Arc<WriteExecutor>) -> Self {
        Self { store, executor }
    }

    /// Inserts a helmet association row.
    ///
    /// Returns the inserted row ID, or -1 when the referenced quad is
    /// missing, the helmet bound is violated, the row already exists, the
    /// write errors, or the wait times out.
    pub fn insert(&self, casco: Casco) -> i64 {
        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.insert_casco(&casco));
        match pending.wait() {
            Ok(Ok(rowid)) => rowid,
            Ok(Err(err)) => {
                warn!(%err, "Casco insert failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Casco insert did not complete in time");
                -1
            }
        }
    }

    /// Updates the helmet count of an association row.
    ///
    /// Returns the number of rows changed: 1 on success, 0 when the
    /// composite key is unknown, -1 when the bound is violated, the write
    /// errors, or the wait times out.
    pub fn update(&self, casco: Casco) -> i64 {
        let store = Arc::clone(&self.store);
        let pending = self.executor.submit(move || store.update_casco(&casco));
        match pending.wait() {
            Ok(Ok(rows)) => i64::try_from(rows).unwrap_or(i64::MAX),
            Ok(Err(err)) => {
                warn!(%err, "Casco update failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Casco update did not complete in time");
                -1
            }
        }
    }

    /// Deletes one association row by composite key.
    ///
    /// Returns the number of rows deleted: 1 on success, 0 when the key
    /// is unknown, -1 when the write errors or the wait times out.
    pub fn delete(&self, matricula_quad: &str, id_reserva: i64) -> i64 {
        if matricula_quad.is_empty() {
            return 0;
        }

        let store = Arc::clone(&self.store);
        let matricula_quad = matricula_quad.to_owned();
        let pending = self
            .executor
            .submit(move || store.delete_casco(&matricula_quad, id_reserva));
        match pending.wait() {
            Ok(Ok(rows)) => i64::try_from(rows).unwrap_or(i64::MAX),
            Ok(Err(err)) => {
                warn!(%err, "Casco delete failed");
                -1
            }
            Err(err) => {
                warn!(%err, "Casco delete did not complete in time");
                -1
            }
        }
    }

    /// Observable list of every association row, ordered by reservation.
    #[must_use]
    pub fn all_cascos(&self) -> LiveQuery<Vec<Casco>> {
        LiveQuery::new(Arc::clone(&self.store), &[Table::Cascos], Store::ordered_cascos)
    }

    /// Observable list of one reservation's association rows.
    #[must_use]
    pub fn cascos_for_reserva(&self, id_reserva: i64) -> LiveQuery<Vec<Casco>> {
        LiveQuery::new(Arc::clone(&self.store), &[Table::Cascos], move |store| {
            store.cascos_for_reserva(id_reserva)
        })
    }

    /// Saves a reservation together with its helmet selection,
    /// fire-and-forget.
    ///
    /// The work runs on the write executor: the reservation row is
    /// written first (insert when its id is 0, update otherwise), and
    /// only if that succeeds is the association set atomically replaced.
    /// The outcome is logged and surfaced to observers through the change
    /// bus; callers that need to see the result observe the affected
    /// queries.
    pub fn save_reserva_con_cascos(&self, reserva: Reserva, cascos: Vec<Casco>) {
        let store = Arc::clone(&self.store);
        self.executor.execute(move || {
            let mut reserva = reserva;
            match store.save_reserva_con_cascos(&mut reserva, &cascos) {
                Ok(id_reserva) => {
                    debug!(id_reserva, cascos = cascos.len(), "Saved reserva with cascos");
                }
                Err(err) => warn!(%err, "Failed to save reserva with cascos"),
            }
        });
    }

    /// Reports whether any quad in the selection is already booked by
    /// another reservation (`id_reserva != exclude_reserva_id`) whose
    /// date range intersects `[fecha_recogida, fecha_devolucion]`.
    ///
    /// Blocking: the check runs on the write executor and the caller
    /// waits with the standard bound. Fails closed: a storage error,
    /// timeout, or worker loss reports `true`, blocking the booking
    /// rather than risking a double-booking.
    #[must_use]
    pub fn check_overlaps(
        &self,
        cascos: &[Casco],
        fecha_recogida: i64,
        fecha_devolucion: i64,
        exclude_reserva_id: i64,
    ) -> bool {
        let store = Arc::clone(&self.store);
        let seleccion = cascos.to_vec();
        let pending = self.executor.submit(move || {
            store.check_overlaps(
                &seleccion,
                fecha_recogida,
                fecha_devolucion,
                exclude_reserva_id,
            )
        });

        match pending.wait() {
            Ok(Ok(overlap)) => overlap,
            Ok(Err(err)) => {
                warn!(%err, "Overlap check failed; blocking the booking");
                true
            }
            Err(err) => {
                warn!(%err, "Overlap check did not complete in time; blocking the booking");
                true
            }
        }
    }
}
