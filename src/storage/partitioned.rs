use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::storage::{PartitionHandle, PartitionNaming, PartitionSet, StorageError};

/// A directory of `<prefix><NNN>.<extension>` files forming one logical table.
///
/// Files that do not match the naming pattern are ignored.
#[derive(Debug, Clone)]
pub struct PartitionedDirectory {
    directory: PathBuf,
    naming: PartitionNaming
}

impl PartitionedDirectory {
    pub fn new(directory: impl Into<PathBuf>, naming: PartitionNaming) -> Self {
        Self {
            directory: directory.into(),
            naming
        }
    }
}

impl PartitionSet for PartitionedDirectory {
    fn location(&self) -> &Path {
        &self.directory
    }

    fn list_partitions(&self) -> Result<Vec<PartitionHandle>, StorageError> {
        let entries = fs::read_dir(&self.directory)
            .map_err(|error| StorageError::io(&self.directory, error))?;

        let mut names = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|error| StorageError::io(&self.directory, error))?;
            let file_type = entry.file_type().map_err(|error| StorageError::io(entry.path(), error))?;

            if !file_type.is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) if self.naming.matches(&name) => names.push(name),
                Ok(name) => debug!("Ignoring non-partition file [{name}] in {}", self.directory.display()),
                Err(name) => warn!("Ignoring non UTF-8 file name {name:?} in {}", self.directory.display())
            }
        }

        names.sort();

        Ok(names.into_iter().map(|name| PartitionHandle::new(self.directory.join(name))).collect())
    }
}
