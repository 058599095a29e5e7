// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TipoQuad;

/// Errors that can occur during domain validation.
///
/// Messages carried by the `String` variants are user-facing rejection
/// text; callers surface them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The license plate is missing or malformed.
    InvalidMatricula(String),
    /// The price violates the sign constraint for its context.
    InvalidPrecio(String),
    /// The quad type text does not name a known type.
    InvalidTipo(String),
    /// A sort-field or filter token is not part of the query vocabulary.
    InvalidCriterio(String),
    /// The client name is empty or blank.
    InvalidNombre(String),
    /// The mobile number is not a valid Spanish mobile.
    InvalidMovil(i32),
    /// A date value or date text is invalid.
    InvalidFecha(String),
    /// The return date precedes the pickup date.
    FechasInvertidas {
        /// Pickup instant (epoch milliseconds).
        fecha_recogida: i64,
        /// Return instant (epoch milliseconds).
        fecha_devolucion: i64,
    },
    /// The helmet count exceeds what the quad's seat count allows.
    InvalidNumCascos {
        /// The type of the quad being booked.
        tipo: TipoQuad,
        /// The rejected helmet count.
        num_cascos: i32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMatricula(msg)
            | Self::InvalidPrecio(msg)
            | Self::InvalidNombre(msg)
            | Self::InvalidFecha(msg) => write!(f, "{msg}"),
            Self::InvalidTipo(value) => write!(f, "Tipo de quad desconocido: `{value}`"),
            Self::InvalidCriterio(value) => {
                write!(f, "Criterio de ordenación o filtro desconocido: `{value}`")
            }
            Self::InvalidMovil(movil) => write!(
                f,
                "El número de móvil debe tener 9 cifras y empezar por 6 o 7, no `{movil}`"
            ),
            Self::FechasInvertidas { .. } => {
                write!(
                    f,
                    "La fecha de devolución no puede ser anterior a la de recogida"
                )
            }
            Self::InvalidNumCascos { tipo, num_cascos } => write!(
                f,
                "Un quad {tipo} admite entre 0 y {} cascos, no {num_cascos}",
                tipo.plazas()
            ),
        }
    }
}

impl std::error::Error for DomainError {}
