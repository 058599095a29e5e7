// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking conflict detection tests.

use quadrent_domain::Casco;

use super::{fecha, open_test_store, seed_casco, seed_quads, seed_reserva};

#[test]
fn test_overlap_detected_for_intersecting_ranges_on_same_quad() {
    let store = open_test_store();
    seed_quads(&store);
    let r1 = seed_reserva(&store, "Juan Pérez", "01/01/2025", "05/01/2025");
    seed_casco(&store, "1111ABC", r1);

    let seleccion = [Casco::new("1111ABC", 0, 1)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("03/01/2025"), fecha("08/01/2025"), 0)
        .expect("check");
    assert!(overlap);
}

#[test]
fn test_shared_boundary_counts_as_overlap() {
    let store = open_test_store();
    seed_quads(&store);
    let r1 = seed_reserva(&store, "Juan Pérez", "01/01/2025", "05/01/2025");
    seed_casco(&store, "1111ABC", r1);

    // R2 = [05/01, 10/01]: picks up the day R1 returns. Same-day handover
    // is a conflict.
    let seleccion = [Casco::new("1111ABC", 0, 1)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("05/01/2025"), fecha("10/01/2025"), 0)
        .expect("check");
    assert!(overlap);
}

#[test]
fn test_disjoint_ranges_do_not_overlap() {
    let store = open_test_store();
    seed_quads(&store);
    let r1 = seed_reserva(&store, "Juan Pérez", "01/01/2025", "05/01/2025");
    seed_casco(&store, "1111ABC", r1);

    let seleccion = [Casco::new("1111ABC", 0, 1)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("06/01/2025"), fecha("10/01/2025"), 0)
        .expect("check");
    assert!(!overlap);
}

#[test]
fn test_same_dates_on_other_quad_do_not_overlap() {
    let store = open_test_store();
    seed_quads(&store);
    let r1 = seed_reserva(&store, "Juan Pérez", "01/01/2025", "05/01/2025");
    seed_casco(&store, "1111ABC", r1);

    let seleccion = [Casco::new("2222DEF", 0, 2)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("01/01/2025"), fecha("05/01/2025"), 0)
        .expect("check");
    assert!(!overlap);
}

#[test]
fn test_editing_a_reserva_does_not_conflict_with_itself() {
    let store = open_test_store();
    seed_quads(&store);
    let r1 = seed_reserva(&store, "Juan Pérez", "01/01/2025", "05/01/2025");
    seed_casco(&store, "1111ABC", r1);

    // Re-saving R1 with its own quad over its own dates must pass.
    let seleccion = [Casco::new("1111ABC", r1, 1)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("01/01/2025"), fecha("05/01/2025"), r1)
        .expect("check");
    assert!(!overlap);
}

#[test]
fn test_any_conflicting_quad_in_selection_reports_overlap() {
    let store = open_test_store();
    seed_quads(&store);
    let r1 = seed_reserva(&store, "Juan Pérez", "01/01/2025", "05/01/2025");
    seed_casco(&store, "3333GHI", r1);

    // First quad is free, second collides.
    let seleccion = [Casco::new("1111ABC", 0, 0), Casco::new("3333GHI", 0, 1)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("04/01/2025"), fecha("06/01/2025"), 0)
        .expect("check");
    assert!(overlap);
}

#[test]
fn test_empty_selection_never_overlaps() {
    let store = open_test_store();
    seed_quads(&store);
    let overlap = store
        .check_overlaps(&[], fecha("01/01/2025"), fecha("05/01/2025"), 0)
        .expect("check");
    assert!(!overlap);
}

#[test]
fn test_overlap_ignores_expired_bookings_outside_range() {
    let store = open_test_store();
    seed_quads(&store);
    let viejo = seed_reserva(&store, "Antiguo", "01/06/2024", "10/06/2024");
    seed_casco(&store, "1111ABC", viejo);
    let nuevo = seed_reserva(&store, "Reciente", "01/01/2025", "05/01/2025");
    seed_casco(&store, "1111ABC", nuevo);

    // Fits between the two existing bookings.
    let seleccion = [Casco::new("1111ABC", 0, 1)];
    let overlap = store
        .check_overlaps(&seleccion, fecha("01/07/2024"), fecha("31/12/2024"), 0)
        .expect("check");
    assert!(!overlap);
}
