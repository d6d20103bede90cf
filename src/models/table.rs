use std::mem::size_of;
use std::slice::Iter;

use crate::models::Transaction;

/// The logical transaction table, independent of how it was stored on disk.
///
/// A `Table` is never mutated after construction. Filtering produces a new table that keeps the
/// original row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Transaction>
}

impl Table {
    /// Column names in file order.
    pub const COLUMNS: [&'static str; 9] = [
        "step", "type", "amount", "nameOrig", "nameDest", "isFraud", "isFlaggedFraud", "day", "hour"
    ];

    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Concatenates partition row sets in the order given.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Vec<Transaction>>,
    {
        let mut rows = Vec::new();

        for part in parts {
            rows.extend(part);
        }

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn iter(&self) -> Iter<'_, Transaction> {
        self.rows.iter()
    }

    /// Stable filter: matching rows keep their relative order.
    pub fn filter<P>(&self, predicate: P) -> Table
    where
        P: Fn(&Transaction) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn fraudulent(&self) -> Table {
        self.filter(|row| row.is_fraud)
    }

    pub fn head(&self, count: usize) -> Table {
        self.rows.iter().take(count).cloned().collect()
    }

    /// Approximate heap plus inline footprint of the rows.
    pub fn estimated_size_bytes(&self) -> usize {
        self.rows.iter()
            .map(|row| size_of::<Transaction>() + row.name_orig.capacity() + row.name_dest.capacity())
            .sum()
    }
}

impl FromIterator<Transaction> for Table {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Transaction;
    type IntoIter = Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
