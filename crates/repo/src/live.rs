// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Observable query handles.
//!
//! A [`LiveQuery`] pairs a query over the store with a subscription to
//! the store's change bus, filtered to the tables the query reads. The
//! storage layer publishes after every committed write; observers re-run
//! the query when told a relevant write landed. There is no manual
//! refresh beyond that; the bus is the only trigger.

use std::sync::Arc;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast::Receiver;
use tracing::warn;

use quadrent_persistence::{PersistenceError, Store, StoreEvent, Table};

/// An observable query: fetch now, or block until the data may have
/// changed.
pub struct LiveQuery<T> {
    store: Arc<Store>,
    receiver: Receiver<StoreEvent>,
    tables: &'static [Table],
    fetch: Box<dyn Fn(&Store) -> Result<T, PersistenceError> + Send>,
}

impl<T> LiveQuery<T> {
    pub(crate) fn new<F>(store: Arc<Store>, tables: &'static [Table], fetch: F) -> Self
    where
        F: Fn(&Store) -> Result<T, PersistenceError> + Send + 'static,
    {
        let receiver = store.bus().subscribe();
        Self {
            store,
            receiver,
            tables,
            fetch: Box::new(fetch),
        }
    }

    /// Runs the query against the store now.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    pub fn get(&self) -> Result<T, PersistenceError> {
        (self.fetch)(&self.store)
    }

    /// Blocks until a committed write touches one of this query's tables.
    ///
    /// Returns `true` when the data may have changed (including when this
    /// observer lagged behind the bus and events were dropped, where the safe
    /// reading is "refresh"), and `false` when the store's bus closed and
    /// no further changes will ever be signalled.
    pub fn changed(&mut self) -> bool {
        loop {
            match self.receiver.blocking_recv() {
                Ok(event) if self.is_relevant(&event) => return true,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "live query lagged behind the change bus");
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }

    /// Drains already-published events without blocking.
    ///
    /// Returns `true` if any of them touched this query's tables (or the
    /// observer lagged).
    pub fn try_changed(&mut self) -> bool {
        let mut relevant = false;
        loop {
            match self.receiver.try_recv() {
                Ok(event) => relevant = relevant || self.is_relevant(&event),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "live query lagged behind the change bus");
                    relevant = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return relevant,
            }
        }
    }

    fn is_relevant(&self, event: &StoreEvent) -> bool {
        self.tables.iter().any(|table| event.touches(*table))
    }
}

impl<T> std::fmt::Debug for LiveQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveQuery")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}
