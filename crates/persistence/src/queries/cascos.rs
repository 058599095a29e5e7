// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Helmet association queries, including the overlap count behind the
//! booking conflict check.

use diesel::prelude::*;
use diesel::SqliteConnection;
use quadrent_domain::Casco;
use tracing::debug;

use crate::diesel_schema::{cascos, reservas};
use crate::error::PersistenceError;

type CascoRow = (String, i64, i32);

fn row_to_casco(row: CascoRow) -> Casco {
    let (matricula_quad, id_reserva, num_cascos) = row;
    Casco {
        matricula_quad,
        id_reserva,
        num_cascos,
    }
}

/// Lists every association row, ordered by reservation identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn ordered_cascos(conn: &mut SqliteConnection) -> Result<Vec<Casco>, PersistenceError> {
    let rows = cascos::table
        .order(cascos::id_reserva.asc())
        .select((cascos::matricula_quad, cascos::id_reserva, cascos::num_cascos))
        .load::<CascoRow>(conn)?;

    Ok(rows.into_iter().map(row_to_casco).collect())
}

/// Lists the association rows of one reservation.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn cascos_for_reserva(
    conn: &mut SqliteConnection,
    id_reserva: i64,
) -> Result<Vec<Casco>, PersistenceError> {
    let rows = cascos::table
        .filter(cascos::id_reserva.eq(id_reserva))
        .select((cascos::matricula_quad, cascos::id_reserva, cascos::num_cascos))
        .load::<CascoRow>(conn)?;

    Ok(rows.into_iter().map(row_to_casco).collect())
}

/// Counts reservations other than `exclude_reserva_id` that hold an
/// association row for `matricula_quad` and whose date range intersects
/// `[fecha_recogida, fecha_devolucion]` inclusively.
///
/// Two ranges `[a, b]` and `[c, d]` intersect iff `a <= d && c <= b`;
/// touching endpoints count, so a same-day handover is a conflict.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_overlapping_reservas(
    conn: &mut SqliteConnection,
    matricula_quad: &str,
    exclude_reserva_id: i64,
    fecha_recogida: i64,
    fecha_devolucion: i64,
) -> Result<i64, PersistenceError> {
    let count: i64 = cascos::table
        .inner_join(reservas::table)
        .filter(cascos::matricula_quad.eq(matricula_quad))
        .filter(cascos::id_reserva.ne(exclude_reserva_id))
        .filter(reservas::fecha_recogida.le(fecha_devolucion))
        .filter(reservas::fecha_devolucion.ge(fecha_recogida))
        .count()
        .get_result(conn)?;

    debug!(
        matricula_quad,
        exclude_reserva_id, count, "Counted overlapping reservas"
    );
    Ok(count)
}
