use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use moka::sync::Cache;
use tracing::debug;

use crate::models::Table;
use crate::storage::{PartitionHandle, PartitionSet, StorageError};

pub const DEFAULT_CACHE_CAPACITY: u64 = 4;

/// On-disk identity of a partition set: its location plus the path, length, and modification
/// time of every partition. Any rewrite of a file changes the fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFingerprint {
    location: PathBuf,
    partitions: Vec<(PathBuf, u64, Option<SystemTime>)>
}

impl SourceFingerprint {
    pub fn capture(location: &Path, partitions: &[PartitionHandle]) -> Result<Self, StorageError> {
        let mut captured = Vec::with_capacity(partitions.len());

        for handle in partitions {
            let metadata = fs::metadata(handle.path()).map_err(|error| StorageError::io(handle.path(), error))?;
            captured.push((handle.path().to_path_buf(), metadata.len(), metadata.modified().ok()));
        }

        Ok(Self {
            location: location.to_path_buf(),
            partitions: captured
        })
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }
}

/// Process-wide table cache shared read-only by every view.
///
/// Cloning is cheap and yields a handle to the same cache.
#[derive(Clone)]
pub struct TableCache {
    tables: Cache<SourceFingerprint, Arc<Table>>
}

impl TableCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            tables: Cache::builder().max_capacity(capacity).build()
        }
    }

    /// Returns the cached table for the source's current state, loading it on a miss.
    ///
    /// Concurrent callers asking for the same fingerprint share a single load. A miss first
    /// evicts tables cached for earlier states of the same location.
    pub fn get_or_load(&self, source: &dyn PartitionSet) -> Result<Arc<Table>, StorageError> {
        let fingerprint = source.fingerprint()?;

        if let Some(table) = self.tables.get(&fingerprint) {
            debug!("Table cache hit for {}", fingerprint.location().display());
            return Ok(table);
        }

        let evicted = self.evict_stale(&fingerprint);

        debug!(
            "Table cache miss for {} ({} partition(s), {} stale table(s) evicted)",
            fingerprint.location().display(), fingerprint.partition_count(), evicted
        );

        self.tables
            .try_get_with(fingerprint, || source.load_all().map(Arc::new))
            .map_err(StorageError::Shared)
    }

    /// Number of tables currently held.
    pub fn cached_tables(&self) -> usize {
        self.tables.iter().count()
    }

    fn evict_stale(&self, current: &SourceFingerprint) -> usize {
        let stale: Vec<Arc<SourceFingerprint>> = self.tables
            .iter()
            .map(|(fingerprint, _)| fingerprint)
            .filter(|fingerprint| fingerprint.location() == current.location() && fingerprint.as_ref() != current)
            .collect();

        for fingerprint in &stale {
            self.tables.invalidate(fingerprint.as_ref());
        }

        stale.len()
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
