// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure field and cross-field validation.
//!
//! All validators are advisory: callers run them before attempting a write
//! and surface the error's message as user-facing rejection text. None of
//! them touch storage.

use crate::error::DomainError;
use crate::fechas;
use crate::types::{Quad, Reserva, TipoQuad};

/// Validates a license plate: exactly 4 digits followed by 3 letters.
///
/// # Errors
///
/// Returns [`DomainError::InvalidMatricula`] if the plate is empty, has the
/// wrong length, or does not match the digit/letter layout.
pub fn validate_matricula(matricula: &str) -> Result<(), DomainError> {
    if matricula.is_empty() {
        return Err(DomainError::InvalidMatricula(String::from(
            "La matrícula no puede estar vacía",
        )));
    }
    let caracteres: Vec<char> = matricula.chars().collect();
    if caracteres.len() != 7 {
        return Err(DomainError::InvalidMatricula(String::from(
            "La matrícula debe tener 7 caracteres",
        )));
    }
    let formato_valido = caracteres[..4].iter().all(char::is_ascii_digit)
        && caracteres[4..].iter().all(char::is_ascii_alphabetic);
    if !formato_valido {
        return Err(DomainError::InvalidMatricula(String::from(
            "La matrícula debe tener 4 números y 3 letras",
        )));
    }
    Ok(())
}

/// Validates a quad's rental price: strictly positive cents.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrecio`] if the price is zero or negative.
pub fn validate_precio(precio: i32) -> Result<(), DomainError> {
    if precio <= 0 {
        return Err(DomainError::InvalidPrecio(String::from(
            "El precio debe ser mayor que 0",
        )));
    }
    Ok(())
}

/// Validates a reservation's total price: zero is allowed (no quads yet).
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrecio`] if the total is negative.
pub fn validate_precio_total(precio_total: i32) -> Result<(), DomainError> {
    if precio_total < 0 {
        return Err(DomainError::InvalidPrecio(String::from(
            "El precio no puede ser negativo",
        )));
    }
    Ok(())
}

/// Validates a client name: non-blank after trimming.
///
/// # Errors
///
/// Returns [`DomainError::InvalidNombre`] if the name is empty or blank.
pub fn validate_nombre(nombre: &str) -> Result<(), DomainError> {
    if nombre.trim().is_empty() {
        return Err(DomainError::InvalidNombre(String::from(
            "El nombre no puede estar vacío",
        )));
    }
    Ok(())
}

/// Validates a Spanish mobile number: nine digits starting with 6 or 7.
///
/// # Errors
///
/// Returns [`DomainError::InvalidMovil`] if the number is out of range.
pub fn validate_movil(numero_movil: i32) -> Result<(), DomainError> {
    if !(600_000_000..=799_999_999).contains(&numero_movil) {
        return Err(DomainError::InvalidMovil(numero_movil));
    }
    Ok(())
}

/// Validates a stored date value.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFecha`] if the instant is not positive.
pub fn validate_fecha(fecha: i64) -> Result<(), DomainError> {
    if fecha <= 0 {
        return Err(DomainError::InvalidFecha(String::from("Fecha inválida")));
    }
    Ok(())
}

/// Validates a date in its human-input text form (`dd/MM/yyyy`, strict).
///
/// # Errors
///
/// Returns [`DomainError::InvalidFecha`] if the text does not parse.
pub fn validate_fecha_texto(texto: &str) -> Result<(), DomainError> {
    fechas::parse_fecha(texto).map(|_| ())
}

/// Validates the ordering of a reservation's date range.
///
/// Equal pickup and return dates are allowed (single-day rental). Each date
/// is assumed to have been individually validated already; this combinator
/// only checks their relative order.
///
/// # Errors
///
/// Returns [`DomainError::FechasInvertidas`] if the return precedes the
/// pickup.
pub const fn validate_fechas(fecha_recogida: i64, fecha_devolucion: i64) -> Result<(), DomainError> {
    if fecha_devolucion < fecha_recogida {
        return Err(DomainError::FechasInvertidas {
            fecha_recogida,
            fecha_devolucion,
        });
    }
    Ok(())
}

/// Validates a helmet count against the quad type's seat bound.
///
/// Monoplaza admits 0 or 1 helmet; Biplaza admits 0, 1 or 2.
///
/// # Errors
///
/// Returns [`DomainError::InvalidNumCascos`] if the count is negative or
/// exceeds the seat count.
pub fn validate_num_cascos(tipo: TipoQuad, num_cascos: i32) -> Result<(), DomainError> {
    if !(0..=tipo.plazas()).contains(&num_cascos) {
        return Err(DomainError::InvalidNumCascos { tipo, num_cascos });
    }
    Ok(())
}

/// Runs every field validator a quad must satisfy, first failure wins.
///
/// # Errors
///
/// Returns the error of the first failing field validator.
pub fn validate_quad(quad: &Quad) -> Result<(), DomainError> {
    validate_matricula(&quad.matricula)?;
    validate_precio(quad.precio)?;
    Ok(())
}

/// Runs every field validator a reservation must satisfy, first failure
/// wins.
///
/// # Errors
///
/// Returns the error of the first failing field validator.
pub fn validate_reserva(reserva: &Reserva) -> Result<(), DomainError> {
    validate_nombre(&reserva.nombre_cliente)?;
    validate_movil(reserva.numero_movil)?;
    validate_fecha(reserva.fecha_recogida)?;
    validate_fecha(reserva.fecha_devolucion)?;
    validate_fechas(reserva.fecha_recogida, reserva.fecha_devolucion)?;
    validate_precio_total(reserva.precio_total)?;
    Ok(())
}
