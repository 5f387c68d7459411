//! Network-wide constants.
//!
//! These values are fixed by the network protocol, not by local
//! configuration. Changing one of them is a breaking protocol change that
//! every peer must adopt simultaneously.

/// Number of slots in a player's extended storage inventory.
pub const INVENTORY_SLOTS: usize = 45;

/// Upper bound on the in-memory change log.
///
/// Oldest entries are evicted first. The bound trades completeness of a
/// single replication stream for bounded memory; peers are expected to
/// resync periodically.
pub const CHANGE_LOG_CAPACITY: usize = 1000;

/// Buffer size of the bounded replication stream channel.
///
/// When the consumer lags and the buffer is full, pending items are dropped
/// rather than blocking the producer.
pub const SYNC_CHANNEL_CAPACITY: usize = 100;

/// Default maximum stack size for item types the registry does not know.
pub const DEFAULT_MAX_STACK: i64 = 64;
