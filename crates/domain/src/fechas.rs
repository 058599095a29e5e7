// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date handling for the rental domain.
//!
//! Dates are stored and compared as epoch milliseconds. The `dd/MM/yyyy`
//! text form exists only at the human-input boundary: it is parsed strictly
//! on the way in and rendered on the way out, never persisted.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};

/// Boundary date format, `dd/MM/yyyy` in chrono syntax.
pub const FORMATO_FECHA: &str = "%d/%m/%Y";

/// Parses a `dd/MM/yyyy` date into epoch milliseconds at midnight UTC.
///
/// The parse is strict: impossible dates (`31/02/2025`), other formats and
/// trailing garbage are all rejected.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFecha`] if the text does not parse.
pub fn parse_fecha(texto: &str) -> Result<i64, DomainError> {
    let fecha = NaiveDate::parse_from_str(texto, FORMATO_FECHA).map_err(|_| {
        DomainError::InvalidFecha(String::from("La fecha debe tener el formato dd/MM/yyyy"))
    })?;
    let medianoche = fecha
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| DomainError::InvalidFecha(String::from("Fecha inválida")))?;
    Ok(medianoche.and_utc().timestamp_millis())
}

/// Renders an epoch-milliseconds instant as a `dd/MM/yyyy` date (UTC).
///
/// # Errors
///
/// Returns [`DomainError::InvalidFecha`] if the instant is outside the
/// representable date range.
pub fn format_fecha(millis: i64) -> Result<String, DomainError> {
    let instante = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| DomainError::InvalidFecha(String::from("Fecha inválida")))?;
    Ok(instante.format(FORMATO_FECHA).to_string())
}

/// Current wall-clock instant in epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Inclusive interval intersection.
///
/// `[a_recogida, a_devolucion]` and `[b_recogida, b_devolucion]` overlap
/// iff `a_recogida <= b_devolucion && b_recogida <= a_devolucion`. Touching
/// endpoints count as an overlap: a same-day handover is a conflict.
#[must_use]
pub const fn rangos_solapan(
    a_recogida: i64,
    a_devolucion: i64,
    b_recogida: i64,
    b_devolucion: i64,
) -> bool {
    a_recogida <= b_devolucion && b_recogida <= a_devolucion
}
