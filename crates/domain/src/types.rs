// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seat configuration of a quad.
///
/// The seat count bounds the number of helmets a [`Casco`] row referencing
/// the quad may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TipoQuad {
    /// Single-seat quad. Up to one helmet.
    #[default]
    Monoplaza,
    /// Two-seat quad. Up to two helmets.
    Biplaza,
}

impl FromStr for TipoQuad {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monoplaza" => Ok(Self::Monoplaza),
            "Biplaza" => Ok(Self::Biplaza),
            _ => Err(DomainError::InvalidTipo(s.to_string())),
        }
    }
}

impl std::fmt::Display for TipoQuad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TipoQuad {
    /// Converts this quad type to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monoplaza => "Monoplaza",
            Self::Biplaza => "Biplaza",
        }
    }

    /// Seat count of the quad, which is also the maximum helmet count.
    #[must_use]
    pub const fn plazas(&self) -> i32 {
        match self {
            Self::Monoplaza => 1,
            Self::Biplaza => 2,
        }
    }
}

/// A rentable quad, identified by its license plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad {
    /// License plate, 4 digits followed by 3 letters (e.g. `1111ABC`).
    pub matricula: String,
    /// Seat configuration.
    pub tipo: TipoQuad,
    /// Daily rental price in integer cents. Strictly positive.
    pub precio: i32,
    /// Free-form description.
    pub descripcion: String,
}

impl Quad {
    /// Creates a new quad.
    #[must_use]
    pub fn new(
        matricula: impl Into<String>,
        tipo: TipoQuad,
        precio: i32,
        descripcion: impl Into<String>,
    ) -> Self {
        Self {
            matricula: matricula.into(),
            tipo,
            precio,
            descripcion: descripcion.into(),
        }
    }
}

/// A client's booking for a date range.
///
/// Which quads the booking claims is carried by the [`Casco`] rows that
/// reference it, not by the reservation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserva {
    /// Identifier assigned by the storage layer on insert. `0` marks a
    /// reservation that has not been persisted yet.
    pub id_reserva: i64,
    /// Client name. Non-blank.
    pub nombre_cliente: String,
    /// Spanish mobile number: nine digits starting with 6 or 7.
    pub numero_movil: i32,
    /// Pickup instant, epoch milliseconds.
    pub fecha_recogida: i64,
    /// Return instant, epoch milliseconds. Never before the pickup.
    pub fecha_devolucion: i64,
    /// Total price in integer cents. Never negative.
    pub precio_total: i32,
}

impl Reserva {
    /// Creates a reservation that has not been persisted yet (id 0).
    #[must_use]
    pub fn new(
        nombre_cliente: impl Into<String>,
        numero_movil: i32,
        fecha_recogida: i64,
        fecha_devolucion: i64,
        precio_total: i32,
    ) -> Self {
        Self {
            id_reserva: 0,
            nombre_cliente: nombre_cliente.into(),
            numero_movil,
            fecha_recogida,
            fecha_devolucion,
            precio_total,
        }
    }

    /// Creates a reservation with an already-assigned identifier.
    #[must_use]
    pub fn with_id(
        id_reserva: i64,
        nombre_cliente: impl Into<String>,
        numero_movil: i32,
        fecha_recogida: i64,
        fecha_devolucion: i64,
        precio_total: i32,
    ) -> Self {
        Self {
            id_reserva,
            ..Self::new(
                nombre_cliente,
                numero_movil,
                fecha_recogida,
                fecha_devolucion,
                precio_total,
            )
        }
    }
}

/// Association row linking one quad to one reservation.
///
/// The row's existence means the quad is booked for the reservation's date
/// range; `num_cascos` is informational, and 0 is a valid count (quad
/// rented without helmets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casco {
    /// License plate of the booked quad.
    pub matricula_quad: String,
    /// Identifier of the owning reservation.
    pub id_reserva: i64,
    /// Helmets handed out with the quad, bounded by its seat count.
    pub num_cascos: i32,
}

impl Casco {
    /// Creates a helmet association row.
    #[must_use]
    pub fn new(matricula_quad: impl Into<String>, id_reserva: i64, num_cascos: i32) -> Self {
        Self {
            matricula_quad: matricula_quad.into(),
            id_reserva,
            num_cascos,
        }
    }
}

/// Sort field for quad listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QuadOrder {
    /// Ascending by license plate.
    #[default]
    Matricula,
    /// Ascending by seat configuration.
    Tipo,
    /// Ascending by price.
    Precio,
}

impl FromStr for QuadOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matricula" => Ok(Self::Matricula),
            "tipo" => Ok(Self::Tipo),
            "precio" => Ok(Self::Precio),
            _ => Err(DomainError::InvalidCriterio(s.to_string())),
        }
    }
}

impl QuadOrder {
    /// The UI-facing token naming this sort field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Matricula => "matricula",
            Self::Tipo => "tipo",
            Self::Precio => "precio",
        }
    }
}

/// Sort field for reservation listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReservaOrder {
    /// Ascending by client name.
    #[default]
    NombreCliente,
    /// Ascending by mobile number.
    NumeroMovil,
    /// Ascending by pickup date.
    FechaRecogida,
    /// Ascending by return date.
    FechaDevolucion,
}

impl FromStr for ReservaOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nombreCliente" => Ok(Self::NombreCliente),
            "numeroMovil" => Ok(Self::NumeroMovil),
            "fechaRecogida" => Ok(Self::FechaRecogida),
            "fechaDevolucion" => Ok(Self::FechaDevolucion),
            _ => Err(DomainError::InvalidCriterio(s.to_string())),
        }
    }
}

impl ReservaOrder {
    /// The UI-facing token naming this sort field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NombreCliente => "nombreCliente",
            Self::NumeroMovil => "numeroMovil",
            Self::FechaRecogida => "fechaRecogida",
            Self::FechaDevolucion => "fechaDevolucion",
        }
    }
}

/// Temporal filter for reservation listings, evaluated against a `now`
/// instant supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReservaFilter {
    /// No filter.
    #[default]
    Todas,
    /// Upcoming: pickup strictly after `now`.
    Previstas,
    /// Ongoing: pickup at or before `now`, return at or after `now`.
    Vigentes,
    /// Expired: return strictly before `now`.
    Caducadas,
}

impl FromStr for ReservaFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Todas" => Ok(Self::Todas),
            "Previstas" => Ok(Self::Previstas),
            "Vigentes" => Ok(Self::Vigentes),
            "Caducadas" => Ok(Self::Caducadas),
            _ => Err(DomainError::InvalidCriterio(s.to_string())),
        }
    }
}

impl ReservaFilter {
    /// The UI-facing token naming this filter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todas => "Todas",
            Self::Previstas => "Previstas",
            Self::Vigentes => "Vigentes",
            Self::Caducadas => "Caducadas",
        }
    }
}
