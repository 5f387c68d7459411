//! Inbound ports: what callers can ask of the ledger.

use crate::domain::errors::LedgerError;
use shared_types::InventoryEntry;

/// The full ledger surface. Object-safe so gameplay and replication code
/// can hold a `dyn InventoryLedgerApi` without naming the engine type.
pub trait InventoryLedgerApi: Send + Sync {
    /// Record `inventory` as the newest entry for `player`, attributed to
    /// `server`.
    fn put(&self, player: &str, inventory: &[u8], server: &str) -> Result<(), LedgerError>;

    /// The most recent inventory bytes for `player`.
    fn get(&self, player: &str) -> Result<Vec<u8>, LedgerError>;

    /// Every retained entry for `player`, newest first.
    fn get_history(&self, player: &str) -> Result<Vec<InventoryEntry>, LedgerError>;

    /// Unwind everything `server` contributed. See
    /// [`LedgerStore::delete`](crate::service::LedgerStore::delete).
    fn delete(&self, server: &str, force: bool) -> Result<(), LedgerError>;

    /// Flush and mark the store closed. Idempotent.
    fn close(&self) -> Result<(), LedgerError>;
}

/// Read-side collaborator port: something that can produce the current
/// inventory for a player.
pub trait InventorySource: Send + Sync {
    fn inventory_for(&self, player: &str) -> Result<Vec<u8>, LedgerError>;
}

/// Write-side collaborator port: something that accepts an inventory the
/// local server just saved.
pub trait InventorySink: Send + Sync {
    fn inventory_saved(&self, player: &str, inventory: &[u8]) -> Result<(), LedgerError>;
}
