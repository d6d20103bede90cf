use std::path::{Path, PathBuf};

use crate::storage::{PartitionHandle, PartitionSet, StorageError};

/// A consolidated dataset stored as one file.
#[derive(Debug, Clone)]
pub struct SingleFile {
    path: PathBuf
}

impl SingleFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PartitionSet for SingleFile {
    fn location(&self) -> &Path {
        &self.path
    }

    fn list_partitions(&self) -> Result<Vec<PartitionHandle>, StorageError> {
        Ok(vec![PartitionHandle::new(&self.path)])
    }
}
