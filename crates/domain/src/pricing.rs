// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Casco, Quad};

/// Total price of a quad selection.
///
/// Every quad whose plate appears in the selection contributes its full
/// rental price, regardless of how many helmets it was selected with: a
/// quad booked with 0 helmets still pays the full price. Selected plates
/// with no matching quad in `quads` contribute nothing.
#[must_use]
pub fn compute_precio_total(seleccion: &[Casco], quads: &[Quad]) -> i32 {
    quads
        .iter()
        .filter(|quad| {
            seleccion
                .iter()
                .any(|casco| casco.matricula_quad == quad.matricula)
        })
        .map(|quad| quad.precio)
        .sum()
}
