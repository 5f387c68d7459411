//! # Core Domain Entities
//!
//! The ledger's persisted record shapes and the replication message type.
//!
//! ## Clusters
//!
//! - **History**: [`InventoryEntry`], [`PlayerRecord`]
//! - **Replication**: [`ChangeLogEntry`], [`SyncData`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque player identifier (the store key).
pub type PlayerId = String;

/// Identifier of a peer game server in the network.
pub type ServerId = String;

/// A single inventory update as vouched for by one server.
///
/// Immutable once written: the ledger never edits an entry in place.
/// Cascade cleaning replaces the whole entry with a repaired copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Raw inventory payload, carried verbatim.
    pub inventory: Vec<u8>,
    /// The server that produced this update.
    pub server: ServerId,
    /// Wall-clock instant the update was accepted.
    pub timestamp: DateTime<Utc>,
}

/// The full, timestamp-ordered inventory history for one player.
///
/// Invariant: `entries` is sorted by timestamp descending, so `entries[0]`
/// is always the authoritative current inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Inventory history, newest first.
    #[serde(default)]
    pub entries: Vec<InventoryEntry>,
}

impl PlayerRecord {
    /// Restore the newest-first ordering after an append or a filter pass.
    ///
    /// Stable sort: entries with identical timestamps keep their relative
    /// order, so re-sorting an already-sorted record is a no-op.
    pub fn sort_newest_first(&mut self) {
        self.entries
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    /// The authoritative current entry, if any history remains.
    pub fn latest(&self) -> Option<&InventoryEntry> {
        self.entries.first()
    }
}

/// One mutation observed by the store, kept in the bounded change log so an
/// in-flight replication stream can catch up past its snapshot point.
#[derive(Debug, Clone)]
pub struct ChangeLogEntry {
    /// The player whose record changed.
    pub player: PlayerId,
    /// The appended entry, or `None` for a deletion marker.
    pub entry: Option<InventoryEntry>,
    /// When the mutation was logged.
    pub timestamp: DateTime<Utc>,
    /// Whether this logs a deletion (ban cleanup) rather than a put.
    pub deleted: bool,
}

/// One replication stream message: a record snapshot or a deletion marker.
///
/// Consumed by the wire-protocol collaborator implementing the peer sync
/// handshake. `value: None` tells the peer to drop the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncData {
    /// Store key (the player id bytes).
    pub key: Vec<u8>,
    /// Serialized record, or `None` for a deletion.
    pub value: Option<Vec<u8>>,
}
