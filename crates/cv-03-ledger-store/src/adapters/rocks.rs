//! RocksDB engine adapter: the production persistence backend.

use crate::domain::errors::EngineError;
use crate::ports::outbound::KeyValueEngine;
use rocksdb::{BlockBasedOptions, DBCompressionType, IteratorMode, Options, WriteOptions, DB};
use std::path::{Path, PathBuf};

/// RocksDB tuning knobs.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Database directory.
    pub path: PathBuf,
    /// Memtable size in bytes before flush.
    pub write_buffer_size: usize,
    /// Block cache size in bytes.
    pub block_cache_size: usize,
    /// Fsync every write. Slower, but survives power loss.
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        RocksDbConfig {
            path: PathBuf::from("./data/ledger"),
            write_buffer_size: 64 * 1024 * 1024,
            block_cache_size: 128 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Small buffers and no fsync for fast test runs.
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        RocksDbConfig {
            path: path.into(),
            write_buffer_size: 4 * 1024 * 1024,
            block_cache_size: 8 * 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// A [`KeyValueEngine`] on RocksDB. The handle is internally synchronized,
/// so one instance serves every ledger thread.
pub struct RocksDbEngine {
    db: DB,
    sync_writes: bool,
}

impl RocksDbEngine {
    /// Open (or create) the database at `config.path`.
    ///
    /// A crash can leave a stale `LOCK` file behind; it is removed before
    /// opening so restarts do not require manual cleanup.
    pub fn open(config: &RocksDbConfig) -> Result<Self, EngineError> {
        Self::remove_stale_lock(&config.path)?;

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(DBCompressionType::Snappy);
        opts.set_write_buffer_size(config.write_buffer_size);

        let mut block_opts = BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        let cache = rocksdb::Cache::new_lru_cache(config.block_cache_size);
        block_opts.set_block_cache(&cache);
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, &config.path).map_err(EngineError::io)?;

        tracing::info!(
            "[cv-03] opened rocksdb engine at {}",
            config.path.display()
        );

        Ok(RocksDbEngine {
            db,
            sync_writes: config.sync_writes,
        })
    }

    fn remove_stale_lock(path: &Path) -> Result<(), EngineError> {
        let lock = path.join("LOCK");
        match std::fs::remove_file(&lock) {
            Ok(()) => {
                tracing::warn!("[cv-03] removed stale lock file {}", lock.display());
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(EngineError::io(err)),
        }
    }

    fn write_opts(&self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.sync_writes);
        opts
    }
}

impl KeyValueEngine for RocksDbEngine {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, EngineError> {
        self.db.get(key).map_err(EngineError::io)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), EngineError> {
        self.db
            .put_opt(key, value, &self.write_opts())
            .map_err(EngineError::io)
    }

    fn delete(&self, key: &[u8]) -> Result<(), EngineError> {
        self.db
            .delete_opt(key, &self.write_opts())
            .map_err(EngineError::io)
    }

    fn snapshot_scan(
        &self,
        visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> Result<(), EngineError> {
        let snapshot = self.db.snapshot();
        for item in snapshot.iterator(IteratorMode::Start) {
            let (key, value) = item.map_err(EngineError::corruption)?;
            if !visit(&key, &value) {
                break;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), EngineError> {
        self.db.flush().map_err(EngineError::io)
    }
}
