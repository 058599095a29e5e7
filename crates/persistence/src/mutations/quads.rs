// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quad catalog mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use quadrent_domain::Quad;
use tracing::debug;

use crate::diesel_schema::quads;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new quad.
///
/// A plate collision leaves the table untouched and is reported as
/// [`PersistenceError::DuplicateKey`].
///
/// # Errors
///
/// Returns an error if the plate already exists or the insert fails.
pub fn insert_quad(conn: &mut SqliteConnection, quad: &Quad) -> Result<i64, PersistenceError> {
    let rows = diesel::insert_into(quads::table)
        .values((
            quads::matricula.eq(&quad.matricula),
            quads::tipo.eq(quad.tipo.as_str()),
            quads::precio.eq(quad.precio),
            quads::descripcion.eq(&quad.descripcion),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::DuplicateKey(format!(
            "Quad {} already exists",
            quad.matricula
        )));
    }

    let rowid = get_last_insert_rowid(conn)?;
    debug!(matricula = %quad.matricula, rowid, "Inserted quad");
    Ok(rowid)
}

/// Updates a quad identified by its plate. Returns the number of rows
/// changed (0 when no quad carries that plate).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_quad(conn: &mut SqliteConnection, quad: &Quad) -> Result<usize, PersistenceError> {
    let rows = diesel::update(quads::table.filter(quads::matricula.eq(&quad.matricula)))
        .set((
            quads::tipo.eq(quad.tipo.as_str()),
            quads::precio.eq(quad.precio),
            quads::descripcion.eq(&quad.descripcion),
        ))
        .execute(conn)?;

    debug!(matricula = %quad.matricula, rows, "Updated quad");
    Ok(rows)
}

/// Deletes a quad by plate, cascading to its helmet rows. Returns the
/// number of rows deleted (0 when no quad carries that plate).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_quad(conn: &mut SqliteConnection, matricula: &str) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(quads::table.filter(quads::matricula.eq(matricula))).execute(conn)?;
    debug!(matricula, rows, "Deleted quad");
    Ok(rows)
}

/// Deletes every quad, cascading to every helmet row.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_all_quads(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let rows = diesel::delete(quads::table).execute(conn)?;
    debug!(rows, "Cleared quad table");
    Ok(rows)
}
