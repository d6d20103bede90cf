use tracing::debug;

use crate::config::DataSourceConfig;
use crate::storage::{PartitionSet, PartitionedDirectory, SingleFile};

/// Picks the storage variant for the configured locations.
///
/// The chunk directory wins over the consolidated file. `None` means neither exists.
pub fn discover(config: &DataSourceConfig) -> Option<Box<dyn PartitionSet>> {
    if config.chunk_dir.is_dir() {
        debug!("Using partitioned source at {}", config.chunk_dir.display());
        return Some(Box::new(PartitionedDirectory::new(&config.chunk_dir, config.naming.clone())));
    }

    if config.fallback_file.is_file() {
        debug!("Using consolidated source at {}", config.fallback_file.display());
        return Some(Box::new(SingleFile::new(&config.fallback_file)));
    }

    None
}
