//! Store configuration.

use shared_types::constants::{CHANGE_LOG_CAPACITY, SYNC_CHANNEL_CAPACITY};

/// Tunables for a [`LedgerStore`](crate::service::LedgerStore).
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Maximum retained change-log entries before eviction.
    pub change_log_capacity: usize,
    /// Buffer size of each replication stream channel.
    pub sync_channel_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            change_log_capacity: CHANGE_LOG_CAPACITY,
            sync_channel_capacity: SYNC_CHANNEL_CAPACITY,
        }
    }
}

impl LedgerConfig {
    /// Small limits so tests can hit eviction and backpressure cheaply.
    pub fn for_testing() -> Self {
        LedgerConfig {
            change_log_capacity: 16,
            sync_channel_capacity: 4,
        }
    }
}
