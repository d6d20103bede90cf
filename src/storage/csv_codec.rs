use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::debug;

use crate::models::{Table, Transaction, TransactionRecord};
use crate::storage::StorageError;

/// Reads every row of a dataset file. The first malformed row aborts the read.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>, StorageError> {
    let file = File::open(path).map_err(|error| StorageError::io(path, error))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<TransactionRecord>().enumerate() {
        let record = result.map_err(|error| StorageError::csv(path, error))?;

        //NOTE: Line numbers are 1-based and the header occupies line 1
        let transaction = Transaction::try_from(record).map_err(|source| StorageError::InvalidRecord {
            path: path.to_path_buf(),
            line: index as u64 + 2,
            source
        })?;

        rows.push(transaction);
    }

    debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

/// Writes rows with a header line. An empty slice still produces the header.
pub fn write_transactions(path: &Path, rows: &[Transaction]) -> Result<(), StorageError> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| StorageError::csv(path, error))?;

    if rows.is_empty() {
        writer.write_record(Table::COLUMNS).map_err(|error| StorageError::csv(path, error))?;
    }

    for row in rows {
        writer.serialize(row).map_err(|error| StorageError::csv(path, error))?;
    }

    writer.flush().map_err(|error| StorageError::io(path, error))?;

    Ok(())
}
