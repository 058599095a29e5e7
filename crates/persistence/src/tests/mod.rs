// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod overlap_tests;
mod reserva_tests;

use quadrent_domain::{Casco, Quad, Reserva, TipoQuad, parse_fecha};

use crate::Store;

pub fn open_test_store() -> Store {
    Store::open_in_memory().expect("in-memory store")
}

pub fn fecha(texto: &str) -> i64 {
    parse_fecha(texto).expect("valid test date")
}

/// Seeds the sample catalog: one Monoplaza, one Biplaza, one Monoplaza.
pub fn seed_quads(store: &Store) {
    for quad in [
        Quad::new("1111ABC", TipoQuad::Monoplaza, 5000, "Yamaha Raptor 700"),
        Quad::new("2222DEF", TipoQuad::Biplaza, 7550, "Honda TRX 450R"),
        Quad::new("3333GHI", TipoQuad::Monoplaza, 4500, "Suzuki LTZ 400"),
    ] {
        store.insert_quad(&quad).expect("seed quad");
    }
}

/// Inserts a reservation for the given date range and returns its id.
pub fn seed_reserva(store: &Store, nombre: &str, recogida: &str, devolucion: &str) -> i64 {
    let reserva = Reserva::new(nombre, 666_111_222, fecha(recogida), fecha(devolucion), 0);
    store.insert_reserva(&reserva).expect("seed reserva")
}

/// Books `matricula` (with one helmet) under the reservation.
pub fn seed_casco(store: &Store, matricula: &str, id_reserva: i64) {
    store
        .insert_casco(&Casco::new(matricula, id_reserva, 1))
        .expect("seed casco");
}
