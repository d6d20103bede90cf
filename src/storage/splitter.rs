use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::models::Table;
use crate::storage::{write_transactions, PartitionNaming, StorageError, MAX_PARTITIONS};

/// Rows destined for one partition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    pub index: usize,
    pub file_name: String,
    pub rows: Range<usize>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPartition {
    pub path: PathBuf,
    pub rows: usize
}

/// Data-preparation tool that cuts a table into contiguous, sequentially numbered partitions.
#[derive(Debug, Clone)]
pub struct Splitter {
    naming: PartitionNaming,
    rows_per_partition: usize
}

impl Splitter {
    pub fn new(naming: PartitionNaming, rows_per_partition: usize) -> Result<Self, StorageError> {
        if rows_per_partition == 0 {
            return Err(StorageError::InvalidPartitionSize);
        }

        Ok(Self {
            naming,
            rows_per_partition
        })
    }

    /// Partition `i` covers `[i * k, min((i + 1) * k, total_rows))`.
    pub fn plan(&self, total_rows: usize) -> Result<Vec<PartitionPlan>, StorageError> {
        let count = total_rows.div_ceil(self.rows_per_partition);

        if count > MAX_PARTITIONS {
            return Err(StorageError::TooManyPartitions {
                rows: total_rows,
                rows_per_partition: self.rows_per_partition,
                max: MAX_PARTITIONS
            });
        }

        let plans = (0..count)
            .map(|index| {
                let start = index * self.rows_per_partition;
                let end = (start + self.rows_per_partition).min(total_rows);

                PartitionPlan {
                    index,
                    file_name: self.naming.file_name(index),
                    rows: start..end
                }
            })
            .collect();

        Ok(plans)
    }

    /// Writes the partitions into `output_dir`, replacing any partitions already there.
    pub fn split(&self, table: &Table, output_dir: &Path) -> Result<Vec<WrittenPartition>, StorageError> {
        let timer = Instant::now();
        let plans = self.plan(table.len())?;

        fs::create_dir_all(output_dir).map_err(|error| StorageError::io(output_dir, error))?;
        self.remove_stale_partitions(output_dir)?;

        let mut written = Vec::with_capacity(plans.len());

        for plan in plans {
            let path = output_dir.join(&plan.file_name);
            let rows = &table.rows()[plan.rows.clone()];

            write_transactions(&path, rows)?;
            info!("Saved {} ({} rows)", path.display(), rows.len());

            written.push(WrittenPartition { path, rows: rows.len() });
        }

        info!(
            "Split {} rows into {} partition(s) at {} in {:?}",
            table.len(), written.len(), output_dir.display(), timer.elapsed()
        );

        Ok(written)
    }

    fn remove_stale_partitions(&self, output_dir: &Path) -> Result<(), StorageError> {
        let entries = fs::read_dir(output_dir).map_err(|error| StorageError::io(output_dir, error))?;

        for entry in entries {
            let entry = entry.map_err(|error| StorageError::io(output_dir, error))?;
            let path = entry.path();

            let is_partition = entry.file_name().to_str().is_some_and(|name| self.naming.matches(name));

            if is_partition && path.is_file() {
                fs::remove_file(&path).map_err(|error| StorageError::io(&path, error))?;
                debug!("Removed stale partition {}", path.display());
            }
        }

        Ok(())
    }
}
