//! The deletion protocol: unwinding everything a banned peer contributed.
//!
//! Walking every record under the write lock makes the ban atomic with
//! respect to concurrent puts. Three things happen per record:
//!
//! 1. Entries attributed to the banned server are dropped.
//! 2. In force mode, entries from other servers that are newer than the
//!    banned server's last write are dropped too, on the theory that they
//!    were derived from tainted state.
//! 3. Surviving entries have their inventories cascade-cleaned so items
//!    the banned server originated disappear even from other servers'
//!    snapshots.
//!
//! Records left with no entries are removed from the engine entirely. A
//! record that fails to decode is skipped, never fatal (Invariant 7).

use crate::domain::errors::LedgerError;
use crate::ports::outbound::KeyValueEngine;
use crate::service::LedgerStore;
use cv_02_provenance::cascade::clean_inventory;
use shared_types::{ChangeLogEntry, InventoryEntry, PlayerRecord};

impl<E: KeyValueEngine> LedgerStore<E> {
    /// Remove every trace of `server` from the ledger.
    pub fn delete(&self, server: &str, force: bool) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        if state.closed {
            return Err(LedgerError::Closed);
        }

        let now = self.time.now();
        let mut rows: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();
        self.engine.snapshot_scan(&mut |key, value| {
            rows.push((key.to_vec(), value.to_vec()));
            true
        })?;

        let mut touched = 0usize;
        for (key, value) in rows {
            let record = match serde_json::from_slice::<PlayerRecord>(&value) {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!(
                        "[cv-03] skipping undecodable record key={} during deletion: {}",
                        String::from_utf8_lossy(&key),
                        err
                    );
                    continue;
                }
            };

            let Some((kept, modified)) = scrub_record(record, server, force) else {
                continue;
            };
            if !modified {
                continue;
            }

            if kept.entries.is_empty() {
                self.engine.delete(&key)?;
            } else {
                let bytes = serde_json::to_vec(&kept).map_err(LedgerError::codec)?;
                self.engine.put(&key, &bytes)?;
            }

            let player = String::from_utf8_lossy(&key).into_owned();
            state.change_log.push(ChangeLogEntry {
                player,
                entry: None,
                timestamp: now,
                deleted: true,
            });
            touched += 1;
        }

        tracing::info!(
            "[cv-03] deletion for server={} force={} touched {} records",
            server,
            force,
            touched
        );
        Ok(())
    }
}

/// Apply the deletion rules to one record. Returns the surviving record and
/// whether anything changed, or `None` when the record had no entries to
/// consider.
fn scrub_record(record: PlayerRecord, server: &str, force: bool) -> Option<(PlayerRecord, bool)> {
    if record.entries.is_empty() {
        return None;
    }

    // The banned server's most recent write bounds the force cutoff.
    let last_write = record
        .entries
        .iter()
        .filter(|entry| entry.server == server)
        .map(|entry| entry.timestamp)
        .max();

    let mut kept: Vec<InventoryEntry> = Vec::with_capacity(record.entries.len());
    let mut modified = false;

    for entry in record.entries {
        if entry.server == server {
            modified = true;
            continue;
        }
        if force {
            if let Some(cutoff) = last_write {
                if entry.timestamp > cutoff {
                    modified = true;
                    continue;
                }
            }
        }

        let (cleaned, changed) = clean_inventory(&entry.inventory, server);
        if changed {
            modified = true;
            kept.push(InventoryEntry {
                inventory: cleaned,
                ..entry
            });
        } else {
            kept.push(entry);
        }
    }

    let mut record = PlayerRecord { entries: kept };
    record.sort_newest_first();
    Some((record, modified))
}
