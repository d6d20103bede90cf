use std::sync::Arc;

use tracing::warn;

use crate::config::DataSourceConfig;
use crate::models::Table;
use crate::storage::{discover, StorageError, TableCache};

/// Explicit process-wide data context.
///
/// Constructed once at startup and passed by reference to every consumer. The first `load`
/// reads the source; later calls reuse the cached table until the underlying files change.
/// Nothing needs tearing down beyond dropping it at process exit.
pub struct Dataset {
    config: DataSourceConfig,
    cache: TableCache
}

impl Dataset {
    pub fn new(config: DataSourceConfig) -> Self {
        Self::with_cache(config, TableCache::default())
    }

    pub fn with_cache(config: DataSourceConfig, cache: TableCache) -> Self {
        Self { config, cache }
    }

    /// `Ok(None)` when neither the chunk directory nor the fallback file exists.
    pub fn load(&self) -> Result<Option<Arc<Table>>, StorageError> {
        let Some(source) = discover(&self.config) else {
            warn!(
                "No data source found at {} or {}",
                self.config.chunk_dir.display(), self.config.fallback_file.display()
            );
            return Ok(None);
        };

        self.cache.get_or_load(source.as_ref()).map(Some)
    }
}
