// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_casco, create_test_quad};
use crate::{
    Casco, DomainError, Quad, QuadOrder, ReservaFilter, ReservaOrder, TipoQuad,
    compute_precio_total,
};
use std::str::FromStr;

#[test]
fn test_tipo_quad_round_trips_through_stored_text() {
    for tipo in [TipoQuad::Monoplaza, TipoQuad::Biplaza] {
        assert_eq!(TipoQuad::from_str(tipo.as_str()).expect("round trip"), tipo);
    }
}

#[test]
fn test_tipo_quad_rejects_unknown_text() {
    let err = TipoQuad::from_str("Triplaza").unwrap_err();
    assert!(matches!(err, DomainError::InvalidTipo(_)));
}

#[test]
fn test_tipo_quad_seat_counts() {
    assert_eq!(TipoQuad::Monoplaza.plazas(), 1);
    assert_eq!(TipoQuad::Biplaza.plazas(), 2);
}

#[test]
fn test_reserva_new_starts_unpersisted() {
    let reserva = super::create_test_reserva();
    assert_eq!(reserva.id_reserva, 0);
}

#[test]
fn test_order_and_filter_tokens_round_trip() {
    for order in [QuadOrder::Matricula, QuadOrder::Tipo, QuadOrder::Precio] {
        assert_eq!(QuadOrder::from_str(order.as_str()).expect("token"), order);
    }
    for order in [
        ReservaOrder::NombreCliente,
        ReservaOrder::NumeroMovil,
        ReservaOrder::FechaRecogida,
        ReservaOrder::FechaDevolucion,
    ] {
        assert_eq!(
            ReservaOrder::from_str(order.as_str()).expect("token"),
            order
        );
    }
    for filter in [
        ReservaFilter::Todas,
        ReservaFilter::Previstas,
        ReservaFilter::Vigentes,
        ReservaFilter::Caducadas,
    ] {
        assert_eq!(
            ReservaFilter::from_str(filter.as_str()).expect("token"),
            filter
        );
    }
}

#[test]
fn test_order_tokens_reject_unknown_field_names() {
    assert!(QuadOrder::from_str("descripcion").is_err());
    assert!(ReservaOrder::from_str("precioTotal").is_err());
    assert!(ReservaFilter::from_str("previstas").is_err());
}

#[test]
fn test_compute_precio_total_charges_selected_quads_in_full() {
    let quads = vec![
        create_test_quad(),
        Quad::new("2222DEF", TipoQuad::Biplaza, 7550, "Honda TRX 450R"),
        Quad::new("3333GHI", TipoQuad::Monoplaza, 4500, "Suzuki LTZ 400"),
    ];
    // One quad with helmets, one without: both pay full price.
    let seleccion = vec![create_test_casco(7), Casco::new("2222DEF", 7, 0)];
    assert_eq!(compute_precio_total(&seleccion, &quads), 5000 + 7550);
}

#[test]
fn test_compute_precio_total_ignores_unknown_plates() {
    let quads = vec![create_test_quad()];
    let seleccion = vec![Casco::new("9999ZZZ", 1, 0)];
    assert_eq!(compute_precio_total(&seleccion, &quads), 0);
}

#[test]
fn test_compute_precio_total_empty_selection_is_free() {
    let quads = vec![create_test_quad()];
    assert_eq!(compute_precio_total(&[], &quads), 0);
}
