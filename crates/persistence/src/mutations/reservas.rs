// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use quadrent_domain::Reserva;
use tracing::debug;

use crate::diesel_schema::reservas;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a reservation and returns its identifier.
///
/// A reservation with `id_reserva == 0` receives a fresh identifier from
/// the database; a nonzero identifier is preserved, and colliding with an
/// existing row is reported as [`PersistenceError::DuplicateKey`] with the
/// table untouched.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_reserva(
    conn: &mut SqliteConnection,
    reserva: &Reserva,
) -> Result<i64, PersistenceError> {
    if reserva.id_reserva == 0 {
        diesel::insert_into(reservas::table)
            .values((
                reservas::nombre_cliente.eq(&reserva.nombre_cliente),
                reservas::numero_movil.eq(reserva.numero_movil),
                reservas::fecha_recogida.eq(reserva.fecha_recogida),
                reservas::fecha_devolucion.eq(reserva.fecha_devolucion),
                reservas::precio_total.eq(reserva.precio_total),
            ))
            .execute(conn)?;

        let id_reserva = get_last_insert_rowid(conn)?;
        debug!(id_reserva, "Inserted reserva");
        return Ok(id_reserva);
    }

    let rows = diesel::insert_into(reservas::table)
        .values((
            reservas::id_reserva.eq(reserva.id_reserva),
            reservas::nombre_cliente.eq(&reserva.nombre_cliente),
            reservas::numero_movil.eq(reserva.numero_movil),
            reservas::fecha_recogida.eq(reserva.fecha_recogida),
            reservas::fecha_devolucion.eq(reserva.fecha_devolucion),
            reservas::precio_total.eq(reserva.precio_total),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::DuplicateKey(format!(
            "Reserva {} already exists",
            reserva.id_reserva
        )));
    }

    debug!(id_reserva = reserva.id_reserva, "Inserted reserva with explicit id");
    Ok(reserva.id_reserva)
}

/// Updates a reservation identified by `id_reserva`. Returns the number of
/// rows changed (0 when the identifier is unknown).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_reserva(
    conn: &mut SqliteConnection,
    reserva: &Reserva,
) -> Result<usize, PersistenceError> {
    let rows = diesel::update(reservas::table.filter(reservas::id_reserva.eq(reserva.id_reserva)))
        .set((
            reservas::nombre_cliente.eq(&reserva.nombre_cliente),
            reservas::numero_movil.eq(reserva.numero_movil),
            reservas::fecha_recogida.eq(reserva.fecha_recogida),
            reservas::fecha_devolucion.eq(reserva.fecha_devolucion),
            reservas::precio_total.eq(reserva.precio_total),
        ))
        .execute(conn)?;

    debug!(id_reserva = reserva.id_reserva, rows, "Updated reserva");
    Ok(rows)
}

/// Deletes a reservation by identifier, cascading to its helmet rows.
/// Returns the number of rows deleted (0 when the identifier is unknown).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_reserva(
    conn: &mut SqliteConnection,
    id_reserva: i64,
) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(reservas::table.filter(reservas::id_reserva.eq(id_reserva)))
        .execute(conn)?;
    debug!(id_reserva, rows, "Deleted reserva");
    Ok(rows)
}

/// Deletes every reservation, cascading to every helmet row.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_all_reservas(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(reservas::table).execute(conn)?;
    debug!(rows, "Cleared reserva table");
    Ok(rows)
}
