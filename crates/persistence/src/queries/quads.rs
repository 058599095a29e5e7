// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quad catalog queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use quadrent_domain::{Quad, QuadOrder, TipoQuad};
use std::str::FromStr;

use crate::diesel_schema::quads;
use crate::error::PersistenceError;

type QuadRow = (String, String, i32, String);

fn row_to_quad(row: QuadRow) -> Result<Quad, PersistenceError> {
    let (matricula, tipo, precio, descripcion) = row;
    let tipo = TipoQuad::from_str(&tipo)?;
    Ok(Quad {
        matricula,
        tipo,
        precio,
        descripcion,
    })
}

/// Lists every quad, sorted ascending by the given field.
///
/// # Errors
///
/// Returns an error if the query fails or a stored quad type does not
/// parse.
pub fn ordered_quads(
    conn: &mut SqliteConnection,
    order: QuadOrder,
) -> Result<Vec<Quad>, PersistenceError> {
    let mut query = quads::table
        .select((
            quads::matricula,
            quads::tipo,
            quads::precio,
            quads::descripcion,
        ))
        .into_boxed();
    query = match order {
        QuadOrder::Matricula => query.order(quads::matricula.asc()),
        QuadOrder::Tipo => query.order(quads::tipo.asc()),
        QuadOrder::Precio => query.order(quads::precio.asc()),
    };

    let rows = query.load::<QuadRow>(conn)?;

    rows.into_iter().map(row_to_quad).collect()
}

/// Looks up one quad by plate.
///
/// # Errors
///
/// Returns an error if the query fails or the stored quad type does not
/// parse.
pub fn quad_by_matricula(
    conn: &mut SqliteConnection,
    matricula: &str,
) -> Result<Option<Quad>, PersistenceError> {
    let row = quads::table
        .filter(quads::matricula.eq(matricula))
        .select((
            quads::matricula,
            quads::tipo,
            quads::precio,
            quads::descripcion,
        ))
        .first::<QuadRow>(conn)
        .optional()?;

    row.map(row_to_quad).transpose()
}
