//! Outbound ports: the ordered key-value engine and the clock.

use crate::domain::errors::EngineError;
use chrono::{DateTime, Utc};

/// An embedded ordered key-value engine.
///
/// Implementations are internally synchronized; the ledger calls them from
/// multiple threads without external locking.
pub trait KeyValueEngine: Send + Sync + 'static {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, EngineError>;

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), EngineError>;

    fn delete(&self, key: &[u8]) -> Result<(), EngineError>;

    /// Walk a point-in-time view of the whole keyspace in key order,
    /// calling `visit` per pair. Writes that land after the scan starts
    /// are not observed. Returning `false` from `visit` stops the walk.
    fn snapshot_scan(
        &self,
        visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> Result<(), EngineError>;

    /// Force buffered writes down to durable storage.
    fn flush(&self) -> Result<(), EngineError>;
}

/// Clock abstraction so tests can control entry timestamps.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
