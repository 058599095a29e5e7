// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store-scoped change notifications.
//!
//! [`StoreBus`] is the publish/subscribe hub a [`Store`](crate::Store)
//! uses to tell observers that a committed write changed one of the rental
//! tables. Events are facts about what changed, not directives: observers
//! re-run their queries against the store for authoritative data.
//!
//! The bus lives inside its store (there is no process-global channel)
//! and publishing with no subscribers is a no-op.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Maximum number of events buffered per subscriber. Subscribers that
/// cannot keep up lose the oldest events and are told they lagged.
pub const EVENT_BUFFER_SIZE: usize = 100;

/// The three rental tables an event can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    /// The quad catalog.
    Quads,
    /// The reservations.
    Reservas,
    /// The helmet associations.
    Cascos,
}

/// A committed change to the store.
///
/// Deletions of a quad or reservation cascade to the helmet rows that
/// referenced it, so those events report the casco table among their
/// [`affected_tables`](StoreEvent::affected_tables) as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A quad was inserted or updated.
    QuadSaved {
        /// The quad's license plate.
        matricula: String,
    },
    /// A quad was deleted (its casco rows went with it).
    QuadDeleted {
        /// The deleted quad's license plate.
        matricula: String,
    },
    /// Every quad was deleted.
    QuadsCleared,
    /// A reservation was inserted or updated.
    ReservaSaved {
        /// The reservation identifier.
        id_reserva: i64,
    },
    /// A reservation was deleted (its casco rows went with it).
    ReservaDeleted {
        /// The deleted reservation identifier.
        id_reserva: i64,
    },
    /// Every reservation was deleted.
    ReservasCleared,
    /// A single helmet association was inserted or updated.
    CascoSaved {
        /// The booked quad's license plate.
        matricula_quad: String,
        /// The owning reservation identifier.
        id_reserva: i64,
    },
    /// A single helmet association was deleted.
    CascoDeleted {
        /// The booked quad's license plate.
        matricula_quad: String,
        /// The owning reservation identifier.
        id_reserva: i64,
    },
    /// A reservation's association set was atomically replaced.
    CascosReplaced {
        /// The reservation whose associations were rewritten.
        id_reserva: i64,
    },
    /// Every helmet association was deleted.
    CascosCleared,
}

impl StoreEvent {
    /// The tables whose query results this event invalidates.
    #[must_use]
    pub const fn affected_tables(&self) -> &'static [Table] {
        match self {
            Self::QuadSaved { .. } => &[Table::Quads],
            Self::QuadDeleted { .. } | Self::QuadsCleared => &[Table::Quads, Table::Cascos],
            Self::ReservaSaved { .. } => &[Table::Reservas],
            Self::ReservaDeleted { .. } | Self::ReservasCleared => {
                &[Table::Reservas, Table::Cascos]
            }
            Self::CascoSaved { .. }
            | Self::CascoDeleted { .. }
            | Self::CascosReplaced { .. }
            | Self::CascosCleared => &[Table::Cascos],
        }
    }

    /// Whether this event invalidates query results over `table`.
    #[must_use]
    pub fn touches(&self, table: Table) -> bool {
        self.affected_tables().contains(&table)
    }
}

/// In-process fan-out bus for [`StoreEvent`]s.
#[derive(Debug)]
pub struct StoreBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl StoreBus {
    /// Creates a bus with the given per-subscriber buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to every event published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event to all current subscribers.
    pub(crate) fn publish(&self, event: StoreEvent) {
        // send only fails when there are no receivers, which is fine.
        let _ = self.sender.send(event);
    }
}

impl Default for StoreBus {
    fn default() -> Self {
        Self::new(EVENT_BUFFER_SIZE)
    }
}
