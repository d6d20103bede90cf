use tracing::debug;

use crate::engine::Stats;
use crate::models::Table;

/// Rows where `query` is exactly the origin or destination account, in table order.
///
/// An empty query matches nothing rather than everything.
pub fn search(table: &Table, query: &str) -> Table {
    if query.is_empty() {
        return Table::empty();
    }

    let results = table.filter(|row| row.involves(query));
    debug!("Entity search for [{query}] matched {} rows", results.len());

    results
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityStatus {
    /// The entity never appears in the table.
    NotFound,
    /// The entity appears only in non-fraudulent transactions.
    Clean,
    /// The entity is party to confirmed fraud.
    Linked {
        fraud_events: u64
    }
}

/// Investigation result for one account: its ledger plus statistics scoped to it.
#[derive(Debug, Clone)]
pub struct EntityReport {
    pub entity_id: String,
    pub ledger: Table,
    pub stats: Stats
}

impl EntityReport {
    pub fn investigate(table: &Table, entity_id: &str) -> Self {
        let ledger = search(table, entity_id);
        let stats = Stats::of(&ledger);

        Self {
            entity_id: entity_id.to_string(),
            ledger,
            stats
        }
    }

    pub fn status(&self) -> EntityStatus {
        match (self.stats.count, self.stats.fraud_count) {
            (0, _) => EntityStatus::NotFound,
            (_, 0) => EntityStatus::Clean,
            (_, fraud_events) => EntityStatus::Linked { fraud_events }
        }
    }
}
