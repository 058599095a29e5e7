// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, format_fecha, parse_fecha, rangos_solapan};

#[test]
fn test_parse_fecha_round_trips_through_format() {
    let millis = parse_fecha("20/11/2025").expect("valid date");
    assert!(millis > 0);
    assert_eq!(format_fecha(millis).expect("formattable"), "20/11/2025");
}

#[test]
fn test_parse_fecha_orders_consecutive_days() {
    let dia_20 = parse_fecha("20/11/2025").expect("valid date");
    let dia_21 = parse_fecha("21/11/2025").expect("valid date");
    assert_eq!(dia_21 - dia_20, 86_400_000);
}

#[test]
fn test_parse_fecha_rejects_impossible_date() {
    let result = parse_fecha("31/02/2025");
    assert!(matches!(result, Err(DomainError::InvalidFecha(_))));
}

#[test]
fn test_parse_fecha_rejects_other_formats() {
    for texto in ["2025-11-20", "20-11-2025", "20.11.2025", "", "mañana"] {
        assert!(
            parse_fecha(texto).is_err(),
            "`{texto}` should not parse as dd/MM/yyyy"
        );
    }
}

#[test]
fn test_parse_fecha_rejects_trailing_garbage() {
    assert!(parse_fecha("20/11/2025 extra").is_err());
}

#[test]
fn test_rangos_solapan_with_contained_range() {
    assert!(rangos_solapan(10, 50, 20, 30));
}

#[test]
fn test_rangos_solapan_shared_boundary_counts_as_overlap() {
    // Same-day handover: one rental ends the day the next begins.
    let r1_recogida = parse_fecha("01/01/2025").expect("valid date");
    let r1_devolucion = parse_fecha("05/01/2025").expect("valid date");
    let r2_recogida = parse_fecha("05/01/2025").expect("valid date");
    let r2_devolucion = parse_fecha("10/01/2025").expect("valid date");
    assert!(rangos_solapan(
        r2_recogida,
        r2_devolucion,
        r1_recogida,
        r1_devolucion
    ));
}

#[test]
fn test_rangos_solapan_disjoint_ranges_do_not_overlap() {
    let r1_recogida = parse_fecha("01/01/2025").expect("valid date");
    let r1_devolucion = parse_fecha("05/01/2025").expect("valid date");
    let r2_recogida = parse_fecha("06/01/2025").expect("valid date");
    let r2_devolucion = parse_fecha("10/01/2025").expect("valid date");
    assert!(!rangos_solapan(
        r2_recogida,
        r2_devolucion,
        r1_recogida,
        r1_devolucion
    ));
}

#[test]
fn test_rangos_solapan_is_symmetric() {
    assert!(rangos_solapan(1, 5, 5, 10));
    assert!(rangos_solapan(5, 10, 1, 5));
}
