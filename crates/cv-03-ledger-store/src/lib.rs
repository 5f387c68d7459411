//! # Versioned Ledger Store (cv-03)
//!
//! The authoritative persistence layer for shared player inventory state:
//! a per-player append-only history on an embedded ordered key-value
//! engine, a bounded change log feeding streaming replication, and the
//! deletion protocol that unwinds a banned peer's contributions.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-----------|
//! | 1 | Append-Only History | A put never overwrites an entry |
//! | 2 | Newest First | `entries[0]` is the authoritative inventory |
//! | 3 | Bounded Change Log | At most 1000 logged mutations, oldest evicted |
//! | 4 | Writers Unblocked | Streaming never holds the exclusive lock |
//! | 5 | Best-Effort Streams | Full channel drops items, never blocks |
//! | 6 | Legacy Reads | Bare-array records stay readable indefinitely |
//! | 7 | Skip Corruption | A corrupt record never aborts a full-table walk |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Errors, the bounded change log, store configuration
//! - `ports/` - Inbound API traits and the outbound engine/time ports
//! - `adapters/` - RocksDB engine (production), in-memory engine (tests)
//! - `service/` - The `LedgerStore`, deletion protocol, replication stream
//!
//! ## Usage
//!
//! ```ignore
//! use cv_03_ledger_store::{LedgerConfig, LedgerStore, RocksDbConfig};
//!
//! let store = LedgerStore::open(RocksDbConfig::default(), LedgerConfig::default())?;
//! store.put("alice", inventory_bytes, "srv1")?;
//! let current = store.get("alice")?;
//! let mut stream = store.stream_all();
//! while let Some(sync) = stream.blocking_recv() { /* replicate */ }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::InMemoryEngine;
pub use adapters::rocks::{RocksDbConfig, RocksDbEngine};
pub use domain::change_log::ChangeLog;
pub use domain::config::LedgerConfig;
pub use domain::errors::{EngineError, LedgerError};
pub use ports::inbound::{InventoryLedgerApi, InventorySink, InventorySource};
pub use ports::outbound::{KeyValueEngine, SystemTimeSource, TimeSource};
pub use service::{LedgerStore, LocalServerSink};
