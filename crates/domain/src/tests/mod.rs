// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod fechas_tests;
mod types_tests;

use crate::{Casco, Quad, Reserva, TipoQuad};

pub fn create_test_quad() -> Quad {
    Quad::new("1111ABC", TipoQuad::Monoplaza, 5000, "Yamaha Raptor 700")
}

pub fn create_test_reserva() -> Reserva {
    let recogida = crate::parse_fecha("20/11/2025").expect("valid date");
    let devolucion = crate::parse_fecha("22/11/2025").expect("valid date");
    Reserva::new("Juan Pérez", 666_111_222, recogida, devolucion, 5000)
}

pub fn create_test_casco(id_reserva: i64) -> Casco {
    Casco::new("1111ABC", id_reserva, 1)
}
