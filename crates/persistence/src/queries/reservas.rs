// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use quadrent_domain::{Reserva, ReservaFilter, ReservaOrder};

use crate::diesel_schema::reservas;
use crate::error::PersistenceError;

type ReservaRow = (i64, String, i32, i64, i64, i32);

fn row_to_reserva(row: ReservaRow) -> Reserva {
    let (id_reserva, nombre_cliente, numero_movil, fecha_recogida, fecha_devolucion, precio_total) =
        row;
    Reserva {
        id_reserva,
        nombre_cliente,
        numero_movil,
        fecha_recogida,
        fecha_devolucion,
        precio_total,
    }
}

/// Lists reservations filtered by their temporal status relative to `now`
/// (epoch milliseconds) and sorted ascending by the given field.
///
/// Filter predicates:
/// - `Todas`: every reservation.
/// - `Previstas`: `fecha_recogida > now`.
/// - `Vigentes`: `fecha_recogida <= now && fecha_devolucion >= now`.
/// - `Caducadas`: `fecha_devolucion < now`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn ordered_reservas(
    conn: &mut SqliteConnection,
    order: ReservaOrder,
    filter: ReservaFilter,
    now: i64,
) -> Result<Vec<Reserva>, PersistenceError> {
    let mut query = reservas::table
        .select((
            reservas::id_reserva,
            reservas::nombre_cliente,
            reservas::numero_movil,
            reservas::fecha_recogida,
            reservas::fecha_devolucion,
            reservas::precio_total,
        ))
        .into_boxed();

    query = match filter {
        ReservaFilter::Todas => query,
        ReservaFilter::Previstas => query.filter(reservas::fecha_recogida.gt(now)),
        ReservaFilter::Vigentes => query
            .filter(reservas::fecha_recogida.le(now))
            .filter(reservas::fecha_devolucion.ge(now)),
        ReservaFilter::Caducadas => query.filter(reservas::fecha_devolucion.lt(now)),
    };

    query = match order {
        ReservaOrder::NombreCliente => query.order(reservas::nombre_cliente.asc()),
        ReservaOrder::NumeroMovil => query.order(reservas::numero_movil.asc()),
        ReservaOrder::FechaRecogida => query.order(reservas::fecha_recogida.asc()),
        ReservaOrder::FechaDevolucion => query.order(reservas::fecha_devolucion.asc()),
    };

    let rows = query.load::<ReservaRow>(conn)?;

    Ok(rows.into_iter().map(row_to_reserva).collect())
}

/// Looks up one reservation by identifier.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn reserva_by_id(
    conn: &mut SqliteConnection,
    id_reserva: i64,
) -> Result<Option<Reserva>, PersistenceError> {
    let row = reservas::table
        .filter(reservas::id_reserva.eq(id_reserva))
        .select((
            reservas::id_reserva,
            reservas::nombre_cliente,
            reservas::numero_movil,
            reservas::fecha_recogida,
            reservas::fecha_devolucion,
            reservas::precio_total,
        ))
        .first::<ReservaRow>(conn)
        .optional()?;

    Ok(row.map(row_to_reserva))
}
