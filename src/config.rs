use std::path::{Path, PathBuf};

use crate::storage::PartitionNaming;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const CHUNK_DIR_NAME: &str = "fraud_data_chunks";
pub const FALLBACK_FILE_NAME: &str = "final.csv";
pub const DEFAULT_ROWS_PER_PARTITION: usize = 1_000_000;

/// Where the loader looks for data, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceConfig {
    /// Directory of partition files, preferred when it exists.
    pub chunk_dir: PathBuf,
    /// Consolidated file used when no chunk directory exists.
    pub fallback_file: PathBuf,
    pub naming: PartitionNaming
}

impl DataSourceConfig {
    /// Standard layout under a data directory: `<dir>/fraud_data_chunks` and `<dir>/final.csv`.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();

        Self {
            chunk_dir: data_dir.join(CHUNK_DIR_NAME),
            fallback_file: data_dir.join(FALLBACK_FILE_NAME),
            naming: PartitionNaming::default()
        }
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self::from_data_dir(DEFAULT_DATA_DIR)
    }
}
