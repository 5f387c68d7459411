//! The ledger service: versioned puts, latest-wins reads, history,
//! deletion, streaming replication, and lifecycle.

mod deletion;
mod stream;


use crate::domain::change_log::ChangeLog;
use crate::domain::config::LedgerConfig;
use crate::domain::errors::LedgerError;
use crate::ports::inbound::{InventoryLedgerApi, InventorySink, InventorySource};
use crate::ports::outbound::{KeyValueEngine, SystemTimeSource, TimeSource};
use parking_lot::RwLock;
use shared_types::{ChangeLogEntry, InventoryEntry, PlayerRecord, ServerId};
use std::sync::Arc;

/// Mutable store state guarded by one lock: the change log and the closed
/// flag move together so a stream can never observe a log entry from after
/// close.
pub(crate) struct StoreState {
    pub(crate) change_log: ChangeLog,
    pub(crate) closed: bool,
}

/// The versioned inventory ledger.
///
/// Generic over the engine so tests run on [`InMemoryEngine`](crate::InMemoryEngine)
/// and production on [`RocksDbEngine`](crate::RocksDbEngine). All methods
/// take `&self`; the store is shared across threads behind an `Arc`.
pub struct LedgerStore<E: KeyValueEngine> {
    pub(crate) engine: Arc<E>,
    pub(crate) state: Arc<RwLock<StoreState>>,
    pub(crate) time: Arc<dyn TimeSource>,
    pub(crate) config: LedgerConfig,
}

impl<E: KeyValueEngine> LedgerStore<E> {
    /// Build a store on `engine` with the wall clock.
    pub fn new(engine: E, config: LedgerConfig) -> Self {
        Self::with_time_source(engine, config, Arc::new(SystemTimeSource))
    }

    /// Build a store with an injected clock. Test seam.
    pub fn with_time_source(engine: E, config: LedgerConfig, time: Arc<dyn TimeSource>) -> Self {
        LedgerStore {
            engine: Arc::new(engine),
            state: Arc::new(RwLock::new(StoreState {
                change_log: ChangeLog::new(config.change_log_capacity),
                closed: false,
            })),
            time,
            config,
        }
    }

    /// Append `inventory` as the newest entry for `player`.
    ///
    /// The existing record is read, the entry appended, the newest-first
    /// ordering restored, and the whole record written back. The change
    /// log records the mutation for in-flight streams.
    pub fn put(&self, player: &str, inventory: &[u8], server: &str) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        if state.closed {
            return Err(LedgerError::Closed);
        }

        let mut record = match self.engine.get(player.as_bytes())? {
            Some(bytes) => serde_json::from_slice::<PlayerRecord>(&bytes)
                .map_err(LedgerError::codec)?,
            None => PlayerRecord::default(),
        };

        let now = self.time.now();
        let entry = InventoryEntry {
            inventory: inventory.to_vec(),
            server: server.to_string(),
            timestamp: now,
        };
        record.entries.push(entry.clone());
        record.sort_newest_first();

        let bytes = serde_json::to_vec(&record).map_err(LedgerError::codec)?;
        self.engine.put(player.as_bytes(), &bytes)?;

        state.change_log.push(ChangeLogEntry {
            player: player.to_string(),
            entry: Some(entry),
            timestamp: now,
            deleted: false,
        });

        tracing::debug!(
            "[cv-03] put player={} server={} entries={}",
            player,
            server,
            record.entries.len()
        );
        Ok(())
    }

    /// The most recent inventory bytes for `player`.
    ///
    /// Records written by pre-versioning deployments are bare slot arrays
    /// rather than history objects; those are returned verbatim so old
    /// databases keep working (Invariant 6).
    pub fn get(&self, player: &str) -> Result<Vec<u8>, LedgerError> {
        let state = self.state.read();
        if state.closed {
            return Err(LedgerError::Closed);
        }

        let bytes = self
            .engine
            .get(player.as_bytes())?
            .ok_or(LedgerError::PlayerNotFound)?;

        match serde_json::from_slice::<PlayerRecord>(&bytes) {
            Ok(record) => record
                .latest()
                .map(|entry| entry.inventory.clone())
                .ok_or(LedgerError::PlayerNotFound),
            Err(err) => {
                if serde_json::from_slice::<Vec<serde_json::Value>>(&bytes).is_ok() {
                    tracing::debug!("[cv-03] serving legacy record for player={}", player);
                    Ok(bytes)
                } else {
                    Err(LedgerError::codec(err))
                }
            }
        }
    }

    /// Every retained entry for `player`, newest first.
    pub fn get_history(&self, player: &str) -> Result<Vec<InventoryEntry>, LedgerError> {
        let state = self.state.read();
        if state.closed {
            return Err(LedgerError::Closed);
        }

        let bytes = self
            .engine
            .get(player.as_bytes())?
            .ok_or(LedgerError::PlayerNotFound)?;
        let record: PlayerRecord =
            serde_json::from_slice(&bytes).map_err(LedgerError::codec)?;
        Ok(record.entries)
    }

    /// Flush buffered writes and mark the store closed. Safe to call more
    /// than once; every call after the first is a no-op.
    pub fn close(&self) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        if state.closed {
            return Ok(());
        }
        state.closed = true;
        self.engine.flush()?;
        tracing::info!("[cv-03] ledger store closed");
        Ok(())
    }
}

impl<E: KeyValueEngine> InventoryLedgerApi for LedgerStore<E> {
    fn put(&self, player: &str, inventory: &[u8], server: &str) -> Result<(), LedgerError> {
        LedgerStore::put(self, player, inventory, server)
    }

    fn get(&self, player: &str) -> Result<Vec<u8>, LedgerError> {
        LedgerStore::get(self, player)
    }

    fn get_history(&self, player: &str) -> Result<Vec<InventoryEntry>, LedgerError> {
        LedgerStore::get_history(self, player)
    }

    fn delete(&self, server: &str, force: bool) -> Result<(), LedgerError> {
        LedgerStore::delete(self, server, force)
    }

    fn close(&self) -> Result<(), LedgerError> {
        LedgerStore::close(self)
    }
}

impl<E: KeyValueEngine> InventorySource for LedgerStore<E> {
    fn inventory_for(&self, player: &str) -> Result<Vec<u8>, LedgerError> {
        self.get(player)
    }
}

/// Binds a ledger to the local server identity so save hooks only need a
/// player id and payload.
pub struct LocalServerSink<E: KeyValueEngine> {
    store: Arc<LedgerStore<E>>,
    server: ServerId,
}

impl<E: KeyValueEngine> LocalServerSink<E> {
    pub fn new(store: Arc<LedgerStore<E>>, server: impl Into<ServerId>) -> Self {
        LocalServerSink {
            store,
            server: server.into(),
        }
    }
}

impl<E: KeyValueEngine> InventorySink for LocalServerSink<E> {
    fn inventory_saved(&self, player: &str, inventory: &[u8]) -> Result<(), LedgerError> {
        self.store.put(player, inventory, &self.server)
    }
}

impl LedgerStore<crate::adapters::rocks::RocksDbEngine> {
    /// Open a production store on RocksDB.
    pub fn open(
        rocks: crate::adapters::rocks::RocksDbConfig,
        config: LedgerConfig,
    ) -> Result<Self, LedgerError> {
        let engine = crate::adapters::rocks::RocksDbEngine::open(&rocks)?;
        Ok(LedgerStore::new(engine, config))
    }
}
