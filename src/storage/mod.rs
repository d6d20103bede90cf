mod cache;
mod csv_codec;
mod dataset;
mod discovery;
mod errors;
mod naming;
mod partitioned;
mod single_file;
mod splitter;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::models::{Table, Transaction};

pub use cache::{SourceFingerprint, TableCache};
pub use csv_codec::{read_transactions, write_transactions};
pub use dataset::Dataset;
pub use discovery::discover;
pub use errors::StorageError;
pub use naming::{PartitionNaming, INDEX_WIDTH, MAX_PARTITIONS};
pub use partitioned::PartitionedDirectory;
pub use single_file::SingleFile;
pub use splitter::{PartitionPlan, Splitter, WrittenPartition};

/// Opaque reference to one physical file of a partition set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartitionHandle {
    path: PathBuf
}

impl PartitionHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A storage location that yields one logical table from zero or more files.
pub trait PartitionSet: Send + Sync {
    /// Directory or file the set was discovered at.
    fn location(&self) -> &Path;

    /// Partitions in lexicographic file name order.
    fn list_partitions(&self) -> Result<Vec<PartitionHandle>, StorageError>;

    fn load(&self, handle: &PartitionHandle) -> Result<Vec<Transaction>, StorageError> {
        read_transactions(handle.path())
    }

    /// Concatenation of every partition in listing order.
    fn load_all(&self) -> Result<Table, StorageError> {
        let timer = Instant::now();
        let partitions = self.list_partitions()?;
        let mut parts = Vec::with_capacity(partitions.len());

        for handle in &partitions {
            parts.push(self.load(handle)?);
        }

        let table = Table::concat(parts);

        info!(
            "Loaded {} rows from {} partition(s) at {} in {:?}",
            table.len(), partitions.len(), self.location().display(), timer.elapsed()
        );

        Ok(table)
    }

    /// Identity of the current on-disk state, used as the cache key.
    fn fingerprint(&self) -> Result<SourceFingerprint, StorageError> {
        SourceFingerprint::capture(self.location(), &self.list_partitions()?)
    }
}
