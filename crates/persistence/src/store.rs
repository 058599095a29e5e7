// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The explicitly-constructed storage handle.
//!
//! A [`Store`] owns one `SQLite` connection and the change bus scoped to
//! it. There is no global instance: callers construct a store at startup
//! and hand an `Arc<Store>` to every repository that needs it. Writes are
//! serialized on the connection mutex; after a successful write the store
//! publishes the matching [`StoreEvent`] so observable queries refresh.

use diesel::SqliteConnection;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use quadrent_domain::{
    Casco, Quad, QuadOrder, Reserva, ReservaFilter, ReservaOrder, validate_reserva,
};

use crate::error::PersistenceError;
use crate::events::{StoreBus, StoreEvent};
use crate::{mutations, queries, sqlite};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to [`Store::open_in_memory`] receives a unique sequential ID,
/// so concurrently-running tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Storage handle for the rental tables.
pub struct Store {
    conn: Mutex<SqliteConnection>,
    bus: StoreBus,
}

impl Store {
    /// Opens a file-backed store, running migrations and enabling WAL.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, migrated, or
    /// does not enforce foreign keys.
    pub fn open(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn = sqlite::initialize_database(database_url)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;
        info!(database_url, "Opened rental store");

        Ok(Self {
            conn: Mutex::new(conn),
            bus: StoreBus::default(),
        })
    }

    /// Opens a unique in-memory store (used by tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let url = format!("file:quadrent_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn = sqlite::initialize_database(&url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            bus: StoreBus::default(),
        })
    }

    /// The change bus scoped to this store.
    #[must_use]
    pub const fn bus(&self) -> &StoreBus {
        &self.bus
    }

    fn conn(&self) -> Result<MutexGuard<'_, SqliteConnection>, PersistenceError> {
        self.conn
            .lock()
            .map_err(|_| PersistenceError::Other(String::from("connection mutex poisoned")))
    }

    // ------------------------------------------------------------------
    // Quads
    // ------------------------------------------------------------------

    /// Inserts a quad and returns its row ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the plate already exists or the insert fails.
    pub fn insert_quad(&self, quad: &Quad) -> Result<i64, PersistenceError> {
        let rowid = mutations::quads::insert_quad(&mut *self.conn()?, quad)?;
        self.bus.publish(StoreEvent::QuadSaved {
            matricula: quad.matricula.clone(),
        });
        Ok(rowid)
    }

    /// Updates a quad. Returns the number of rows changed (0 = unknown
    /// plate).
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_quad(&self, quad: &Quad) -> Result<usize, PersistenceError> {
        let rows = mutations::quads::update_quad(&mut *self.conn()?, quad)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::QuadSaved {
                matricula: quad.matricula.clone(),
            });
        }
        Ok(rows)
    }

    /// Deletes a quad by plate, cascading to its helmet rows. Returns the
    /// number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_quad(&self, matricula: &str) -> Result<usize, PersistenceError> {
        let rows = mutations::quads::delete_quad(&mut *self.conn()?, matricula)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::QuadDeleted {
                matricula: matricula.to_string(),
            });
        }
        Ok(rows)
    }

    /// Deletes every quad, cascading to every helmet row.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_all_quads(&self) -> Result<usize, PersistenceError> {
        let rows = mutations::quads::delete_all_quads(&mut *self.conn()?)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::QuadsCleared);
        }
        Ok(rows)
    }

    /// Lists every quad, sorted ascending by the given field.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn ordered_quads(&self, order: QuadOrder) -> Result<Vec<Quad>, PersistenceError> {
        queries::quads::ordered_quads(&mut *self.conn()?, order)
    }

    /// Looks up one quad by plate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn quad_by_matricula(&self, matricula: &str) -> Result<Option<Quad>, PersistenceError> {
        queries::quads::quad_by_matricula(&mut *self.conn()?, matricula)
    }

    // ------------------------------------------------------------------
    // Reservas
    // ------------------------------------------------------------------

    /// Inserts a reservation and returns its identifier (freshly assigned
    /// when the reservation arrived with id 0).
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_reserva(&self, reserva: &Reserva) -> Result<i64, PersistenceError> {
        let id_reserva = mutations::reservas::insert_reserva(&mut *self.conn()?, reserva)?;
        self.bus.publish(StoreEvent::ReservaSaved { id_reserva });
        Ok(id_reserva)
    }

    /// Updates a reservation. Returns the number of rows changed (0 =
    /// unknown identifier).
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_reserva(&self, reserva: &Reserva) -> Result<usize, PersistenceError> {
        let rows = mutations::reservas::update_reserva(&mut *self.conn()?, reserva)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::ReservaSaved {
                id_reserva: reserva.id_reserva,
            });
        }
        Ok(rows)
    }

    /// Deletes a reservation, cascading to its helmet rows. Returns the
    /// number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reserva(&self, id_reserva: i64) -> Result<usize, PersistenceError> {
        let rows = mutations::reservas::delete_reserva(&mut *self.conn()?, id_reserva)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::ReservaDeleted { id_reserva });
        }
        Ok(rows)
    }

    /// Deletes every reservation, cascading to every helmet row.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_all_reservas(&self) -> Result<usize, PersistenceError> {
        let rows = mutations::reservas::delete_all_reservas(&mut *self.conn()?)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::ReservasCleared);
        }
        Ok(rows)
    }

    /// Lists reservations filtered by temporal status relative to `now`
    /// and sorted ascending by the given field.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn ordered_reservas(
        &self,
        order: ReservaOrder,
        filter: ReservaFilter,
        now: i64,
    ) -> Result<Vec<Reserva>, PersistenceError> {
        queries::reservas::ordered_reservas(&mut *self.conn()?, order, filter, now)
    }

    /// Looks up one reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reserva_by_id(&self, id_reserva: i64) -> Result<Option<Reserva>, PersistenceError> {
        queries::reservas::reserva_by_id(&mut *self.conn()?, id_reserva)
    }

    // ------------------------------------------------------------------
    // Cascos
    // ------------------------------------------------------------------

    /// Inserts a helmet association row.
    ///
    /// # Errors
    ///
    /// Returns an error if the referenced quad is missing, the helmet
    /// bound is violated, the row already exists, or the insert fails.
    pub fn insert_casco(&self, casco: &Casco) -> Result<i64, PersistenceError> {
        let rowid = mutations::cascos::insert_casco(&mut *self.conn()?, casco)?;
        self.bus.publish(StoreEvent::CascoSaved {
            matricula_quad: casco.matricula_quad.clone(),
            id_reserva: casco.id_reserva,
        });
        Ok(rowid)
    }

    /// Updates a helmet association row. Returns the number of rows
    /// changed (0 = unknown composite key).
    ///
    /// # Errors
    ///
    /// Returns an error if the helmet bound is violated or the update
    /// fails.
    pub fn update_casco(&self, casco: &Casco) -> Result<usize, PersistenceError> {
        let rows = mutations::cascos::update_casco(&mut *self.conn()?, casco)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::CascoSaved {
                matricula_quad: casco.matricula_quad.clone(),
                id_reserva: casco.id_reserva,
            });
        }
        Ok(rows)
    }

    /// Deletes one helmet association row. Returns the number of rows
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_casco(
        &self,
        matricula_quad: &str,
        id_reserva: i64,
    ) -> Result<usize, PersistenceError> {
        let rows = mutations::cascos::delete_casco(&mut *self.conn()?, matricula_quad, id_reserva)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::CascoDeleted {
                matricula_quad: matricula_quad.to_string(),
                id_reserva,
            });
        }
        Ok(rows)
    }

    /// Deletes every helmet association row.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_all_cascos(&self) -> Result<usize, PersistenceError> {
        let rows = mutations::cascos::delete_all_cascos(&mut *self.conn()?)?;
        if rows > 0 {
            self.bus.publish(StoreEvent::CascosCleared);
        }
        Ok(rows)
    }

    /// Lists every helmet association row, ordered by reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn ordered_cascos(&self) -> Result<Vec<Casco>, PersistenceError> {
        queries::cascos::ordered_cascos(&mut *self.conn()?)
    }

    /// Lists the helmet association rows of one reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn cascos_for_reserva(&self, id_reserva: i64) -> Result<Vec<Casco>, PersistenceError> {
        queries::cascos::cascos_for_reserva(&mut *self.conn()?, id_reserva)
    }

    // ------------------------------------------------------------------
    // Booking operations
    // ------------------------------------------------------------------

    /// Saves a reservation together with its helmet selection.
    ///
    /// The reservation row is written first: inserted (assigning a fresh
    /// identifier to `reserva`) when it arrives with id 0, updated
    /// otherwise. If that write fails the helmet table is not touched.
    /// The association set is then atomically replaced inside one
    /// transaction, with every row carrying the definitive identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation is invalid, references an
    /// unknown identifier, or either write fails.
    pub fn save_reserva_con_cascos(
        &self,
        reserva: &mut Reserva,
        cascos: &[Casco],
    ) -> Result<i64, PersistenceError> {
        validate_reserva(reserva)?;

        let id_reserva = {
            let mut conn = self.conn()?;
            let id_reserva = if reserva.id_reserva == 0 {
                let id = mutations::reservas::insert_reserva(&mut conn, reserva)?;
                reserva.id_reserva = id;
                id
            } else {
                let rows = mutations::reservas::update_reserva(&mut conn, reserva)?;
                if rows == 0 {
                    return Err(PersistenceError::NotFound(format!(
                        "Reserva {} does not exist",
                        reserva.id_reserva
                    )));
                }
                reserva.id_reserva
            };

            mutations::cascos::replace_cascos_for_reserva(&mut conn, id_reserva, cascos)?;
            id_reserva
        };

        self.bus.publish(StoreEvent::ReservaSaved { id_reserva });
        self.bus.publish(StoreEvent::CascosReplaced { id_reserva });
        Ok(id_reserva)
    }

    /// Reports whether any quad in the selection is already booked by
    /// another reservation whose date range intersects the given one.
    ///
    /// Stops at the first conflicting quad.
    ///
    /// # Errors
    ///
    /// Returns an error if an underlying query fails. Callers enforcing
    /// the booking rule must treat an error as a conflict (fail closed).
    pub fn check_overlaps(
        &self,
        cascos: &[Casco],
        fecha_recogida: i64,
        fecha_devolucion: i64,
        exclude_reserva_id: i64,
    ) -> Result<bool, PersistenceError> {
        let mut conn = self.conn()?;
        for casco in cascos {
            let count = queries::cascos::count_overlapping_reservas(
                &mut conn,
                &casco.matricula_quad,
                exclude_reserva_id,
                fecha_recogida,
                fecha_devolucion,
            )?;
            if count > 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
