//! In-memory engine for tests and ephemeral deployments.

use crate::domain::errors::EngineError;
use crate::ports::outbound::KeyValueEngine;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// A [`KeyValueEngine`] backed by an ordered map. `snapshot_scan` clones
/// the map up front, giving the same point-in-time semantics as a real
/// engine snapshot.
#[derive(Debug, Default)]
pub struct InMemoryEngine {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueEngine for InMemoryEngine {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, EngineError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), EngineError> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<(), EngineError> {
        self.data.write().remove(key);
        Ok(())
    }

    fn snapshot_scan(
        &self,
        visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> Result<(), EngineError> {
        let snapshot = self.data.read().clone();
        for (key, value) in &snapshot {
            if !visit(key, value) {
                break;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), EngineError> {
        Ok(())
    }
}
