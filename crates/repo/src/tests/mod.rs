// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod executor_tests;

use std::sync::Arc;

use quadrent_domain::{Quad, Reserva, TipoQuad, parse_fecha};
use quadrent_persistence::Store;

use crate::{CascoRepository, QuadRepository, ReservaRepository, WriteExecutor};

pub struct TestHarness {
    pub quads: QuadRepository,
    pub reservas: ReservaRepository,
    pub cascos: CascoRepository,
}

pub fn harness() -> TestHarness {
    let store = Arc::new(Store::open_in_memory().expect("in-memory store"));
    let executor = Arc::new(WriteExecutor::new());
    TestHarness {
        quads: QuadRepository::new(Arc::clone(&store), Arc::clone(&executor)),
        reservas: ReservaRepository::new(Arc::clone(&store), Arc::clone(&executor)),
        cascos: CascoRepository::new(store, executor),
    }
}

pub fn fecha(texto: &str) -> i64 {
    parse_fecha(texto).expect("valid test date")
}

pub fn sample_quad() -> Quad {
    Quad::new("1111ABC", TipoQuad::Monoplaza, 5000, "Yamaha Raptor 700")
}

pub fn sample_biplaza() -> Quad {
    Quad::new("2222DEF", TipoQuad::Biplaza, 7550, "Honda TRX 450R")
}

pub fn sample_reserva(recogida: &str, devolucion: &str) -> Reserva {
    Reserva::new(
        "Juan Pérez",
        666_111_222,
        fecha(recogida),
        fecha(devolucion),
        5000,
    )
}
