// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation persistence tests, including the temporal filters.

use quadrent_domain::{Reserva, ReservaFilter, ReservaOrder};

use super::{fecha, open_test_store, seed_reserva};

#[test]
fn test_insert_reserva_assigns_sequential_ids() {
    let store = open_test_store();
    let primero = seed_reserva(&store, "Juan Pérez", "20/11/2025", "22/11/2025");
    let segundo = seed_reserva(&store, "Ana García", "01/12/2025", "03/12/2025");
    assert!(primero > 0);
    assert_eq!(segundo, primero + 1);
}

#[test]
fn test_insert_reserva_with_explicit_id_preserves_it() {
    let store = open_test_store();
    let reserva = Reserva::with_id(
        42,
        "Juan Pérez",
        666_111_222,
        fecha("20/11/2025"),
        fecha("22/11/2025"),
        5000,
    );
    assert_eq!(store.insert_reserva(&reserva).expect("insert"), 42);
    let loaded = store
        .reserva_by_id(42)
        .expect("lookup")
        .expect("reserva present");
    assert_eq!(loaded, reserva);
}

#[test]
fn test_update_reserva_changes_fields() {
    let store = open_test_store();
    let id = seed_reserva(&store, "Juan Pérez", "20/11/2025", "22/11/2025");

    let mut reserva = store
        .reserva_by_id(id)
        .expect("lookup")
        .expect("reserva present");
    reserva.nombre_cliente = String::from("Juan P. Martínez");
    reserva.precio_total = 12_550;

    assert_eq!(store.update_reserva(&reserva).expect("update"), 1);
    let loaded = store
        .reserva_by_id(id)
        .expect("lookup")
        .expect("reserva present");
    assert_eq!(loaded, reserva);
}

#[test]
fn test_update_unknown_reserva_affects_zero_rows() {
    let store = open_test_store();
    let ghost = Reserva::with_id(
        999,
        "Nadie",
        666_000_000,
        fecha("20/11/2025"),
        fecha("22/11/2025"),
        0,
    );
    assert_eq!(store.update_reserva(&ghost).expect("update"), 0);
}

#[test]
fn test_delete_reserva_reports_rows_deleted() {
    let store = open_test_store();
    let id = seed_reserva(&store, "Juan Pérez", "20/11/2025", "22/11/2025");
    assert_eq!(store.delete_reserva(id).expect("delete"), 1);
    assert_eq!(store.delete_reserva(id).expect("redelete"), 0);
    assert_eq!(store.reserva_by_id(id).expect("lookup"), None);
}

#[test]
fn test_vigentes_filter_selects_exactly_the_ongoing_window() {
    let store = open_test_store();
    let caducada = seed_reserva(&store, "Pasada", "01/01/2025", "05/01/2025");
    let vigente = seed_reserva(&store, "Actual", "10/01/2025", "20/01/2025");
    let al_limite = seed_reserva(&store, "Límite", "15/01/2025", "15/01/2025");
    let prevista = seed_reserva(&store, "Futura", "16/01/2025", "25/01/2025");

    let now = fecha("15/01/2025");
    let vigentes: Vec<i64> = store
        .ordered_reservas(ReservaOrder::FechaRecogida, ReservaFilter::Vigentes, now)
        .expect("list")
        .into_iter()
        .map(|r| r.id_reserva)
        .collect();
    assert_eq!(vigentes, [vigente, al_limite]);

    let previstas: Vec<i64> = store
        .ordered_reservas(ReservaOrder::FechaRecogida, ReservaFilter::Previstas, now)
        .expect("list")
        .into_iter()
        .map(|r| r.id_reserva)
        .collect();
    assert_eq!(previstas, [prevista]);

    let caducadas: Vec<i64> = store
        .ordered_reservas(ReservaOrder::FechaRecogida, ReservaFilter::Caducadas, now)
        .expect("list")
        .into_iter()
        .map(|r| r.id_reserva)
        .collect();
    assert_eq!(caducadas, [caducada]);

    let todas = store
        .ordered_reservas(ReservaOrder::FechaRecogida, ReservaFilter::Todas, now)
        .expect("list");
    assert_eq!(todas.len(), 4);
}

#[test]
fn test_ordered_reservas_sorts_by_requested_field() {
    let store = open_test_store();
    seed_reserva(&store, "Zoe", "02/02/2025", "03/02/2025");
    seed_reserva(&store, "Ana", "01/03/2025", "05/03/2025");

    let by_nombre: Vec<String> = store
        .ordered_reservas(ReservaOrder::NombreCliente, ReservaFilter::Todas, 0)
        .expect("list")
        .into_iter()
        .map(|r| r.nombre_cliente)
        .collect();
    assert_eq!(by_nombre, ["Ana", "Zoe"]);

    let by_recogida: Vec<String> = store
        .ordered_reservas(ReservaOrder::FechaRecogida, ReservaFilter::Todas, 0)
        .expect("list")
        .into_iter()
        .map(|r| r.nombre_cliente)
        .collect();
    assert_eq!(by_recogida, ["Zoe", "Ana"]);
}
