//! The bounded mutation log.
//!
//! Every successful put or deletion appends an entry here so a replication
//! stream started mid-write can catch up on what the snapshot missed. The
//! log is a ring: once it holds `capacity` entries the oldest is evicted
//! (Invariant 3), which bounds memory at the cost of catch-up completeness
//! for consumers that lag behind.

use chrono::{DateTime, Utc};
use shared_types::ChangeLogEntry;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct ChangeLog {
    entries: VecDeque<ChangeLogEntry>,
    capacity: usize,
}

impl ChangeLog {
    pub fn new(capacity: usize) -> Self {
        ChangeLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a mutation, evicting the oldest entry when full.
    pub fn push(&mut self, entry: ChangeLogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries logged strictly after `since`, oldest first.
    pub fn entries_after(&self, since: DateTime<Utc>) -> Vec<ChangeLogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.timestamp > since)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry_at(player: &str, timestamp: DateTime<Utc>) -> ChangeLogEntry {
        ChangeLogEntry {
            player: player.to_string(),
            entry: None,
            timestamp,
            deleted: false,
        }
    }

    #[test]
    fn evicts_oldest_when_full() {
        let base = Utc::now();
        let mut log = ChangeLog::new(3);
        for i in 0..5 {
            log.push(entry_at(&format!("p{}", i), base + Duration::seconds(i)));
        }

        assert_eq!(log.len(), 3);
        let all = log.entries_after(base - Duration::seconds(1));
        assert_eq!(all[0].player, "p2");
        assert_eq!(all[2].player, "p4");
    }

    #[test]
    fn entries_after_is_strict() {
        let base = Utc::now();
        let mut log = ChangeLog::new(10);
        log.push(entry_at("old", base));
        log.push(entry_at("new", base + Duration::seconds(1)));

        let recent = log.entries_after(base);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].player, "new");
    }
}
