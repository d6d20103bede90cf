use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::models::RecordError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: could not access [{path}]: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },
    #[error("Storage error: CSV failure in [{path}]: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error
    },
    #[error("Storage error: invalid record at [{path}] line [{line}]: {source}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        #[source]
        source: RecordError
    },
    #[error("Storage error: rows per partition must be greater than zero")]
    InvalidPartitionSize,
    #[error("Storage error: [{rows}] rows at [{rows_per_partition}] per partition needs more than [{max}] partitions")]
    TooManyPartitions {
        rows: usize,
        rows_per_partition: usize,
        max: usize
    },
    #[error(transparent)]
    Shared(#[from] Arc<StorageError>)
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }
}
