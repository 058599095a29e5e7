// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Helmet association mutations.
//!
//! Every write through this module enforces the seat-count invariant: a
//! casco row may not carry more helmets than the referenced quad has
//! seats. The check needs the quad's type, so a missing quad surfaces as
//! [`PersistenceError::NotFound`] before the foreign key would fire.

use diesel::prelude::*;
use diesel::SqliteConnection;
use quadrent_domain::{Casco, validate_num_cascos};
use tracing::debug;

use crate::diesel_schema::cascos;
use crate::error::PersistenceError;
use crate::queries::quads::quad_by_matricula;
use crate::sqlite::get_last_insert_rowid;

/// Checks the helmet count of `casco` against its quad's seat count.
fn check_helmet_bound(
    conn: &mut SqliteConnection,
    casco: &Casco,
) -> Result<(), PersistenceError> {
    let quad = quad_by_matricula(conn, &casco.matricula_quad)?.ok_or_else(|| {
        PersistenceError::NotFound(format!("Quad {} does not exist", casco.matricula_quad))
    })?;
    validate_num_cascos(quad.tipo, casco.num_cascos)?;
    Ok(())
}

/// Inserts a helmet association row.
///
/// A collision on the composite key leaves the table untouched and is
/// reported as [`PersistenceError::DuplicateKey`].
///
/// # Errors
///
/// Returns an error if the referenced quad does not exist, the helmet
/// count exceeds its seat count, the row already exists, or the insert
/// fails.
pub fn insert_casco(conn: &mut SqliteConnection, casco: &Casco) -> Result<i64, PersistenceError> {
    check_helmet_bound(conn, casco)?;

    let rows = diesel::insert_into(cascos::table)
        .values((
            cascos::matricula_quad.eq(&casco.matricula_quad),
            cascos::id_reserva.eq(casco.id_reserva),
            cascos::num_cascos.eq(casco.num_cascos),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::DuplicateKey(format!(
            "Casco ({}, {}) already exists",
            casco.matricula_quad, casco.id_reserva
        )));
    }

    let rowid = get_last_insert_rowid(conn)?;
    debug!(
        matricula_quad = %casco.matricula_quad,
        id_reserva = casco.id_reserva,
        "Inserted casco"
    );
    Ok(rowid)
}

/// Updates the helmet count of an association row. Returns the number of
/// rows changed (0 when the composite key is unknown).
///
/// # Errors
///
/// Returns an error if the helmet bound is violated or the update fails.
pub fn update_casco(conn: &mut SqliteConnection, casco: &Casco) -> Result<usize, PersistenceError> {
    check_helmet_bound(conn, casco)?;

    let rows = diesel::update(
        cascos::table
            .filter(cascos::matricula_quad.eq(&casco.matricula_quad))
            .filter(cascos::id_reserva.eq(casco.id_reserva)),
    )
    .set(cascos::num_cascos.eq(casco.num_cascos))
    .execute(conn)?;

    debug!(
        matricula_quad = %casco.matricula_quad,
        id_reserva = casco.id_reserva,
        rows,
        "Updated casco"
    );
    Ok(rows)
}

/// Deletes one association row by composite key. Returns the number of
/// rows deleted (0 when the key is unknown).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_casco(
    conn: &mut SqliteConnection,
    matricula_quad: &str,
    id_reserva: i64,
) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(
        cascos::table
            .filter(cascos::matricula_quad.eq(matricula_quad))
            .filter(cascos::id_reserva.eq(id_reserva)),
    )
    .execute(conn)?;
    debug!(matricula_quad, id_reserva, rows, "Deleted casco");
    Ok(rows)
}

/// Deletes every association row for one reservation.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_cascos_for_reserva(
    conn: &mut SqliteConnection,
    id_reserva: i64,
) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(cascos::table.filter(cascos::id_reserva.eq(id_reserva)))
        .execute(conn)?;
    debug!(id_reserva, rows, "Deleted cascos for reserva");
    Ok(rows)
}

/// Deletes every association row.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_all_cascos(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(cascos::table).execute(conn)?;
    debug!(rows, "Cleared casco table");
    Ok(rows)
}

/// Atomically replaces a reservation's association set.
///
/// Runs delete-then-insert inside a single transaction: a concurrent
/// reader never observes the intermediate empty state, and any failure
/// (helmet bound, missing quad, duplicate plate in the new list) rolls the
/// whole replacement back, leaving the previous set intact. Rows in
/// `cascos` are rewritten to carry `id_reserva` whatever identifier they
/// arrived with.
///
/// Replaying the same call is idempotent: exactly the given rows remain.
///
/// # Errors
///
/// Returns the error that aborted the transaction.
pub fn replace_cascos_for_reserva(
    conn: &mut SqliteConnection,
    id_reserva: i64,
    nuevos_cascos: &[Casco],
) -> Result<usize, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        delete_cascos_for_reserva(conn, id_reserva)?;

        for casco in nuevos_cascos {
            let fila = Casco::new(casco.matricula_quad.clone(), id_reserva, casco.num_cascos);
            check_helmet_bound(conn, &fila)?;
            diesel::insert_into(cascos::table)
                .values((
                    cascos::matricula_quad.eq(&fila.matricula_quad),
                    cascos::id_reserva.eq(fila.id_reserva),
                    cascos::num_cascos.eq(fila.num_cascos),
                ))
                .execute(conn)?;
        }

        debug!(
            id_reserva,
            cascos = nuevos_cascos.len(),
            "Replaced cascos for reserva"
        );
        Ok(nuevos_cascos.len())
    })
}
