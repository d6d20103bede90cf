use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::Rate;

/// Count and amount measures over a set of rows, split by the fraud label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub count: u64,
    pub amount: Decimal,
    pub fraud_count: u64,
    pub fraud_amount: Decimal,
    pub flagged_count: u64,
    pub max_amount: Option<Decimal>
}

impl Stats {
    pub fn of<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut stats = Stats::default();

        for row in rows {
            stats.add(row);
        }

        stats
    }

    pub fn add(&mut self, row: &Transaction) {
        self.count += 1;
        self.amount = self.amount.saturating_add(row.amount);

        if row.is_fraud {
            self.fraud_count += 1;
            self.fraud_amount = self.fraud_amount.saturating_add(row.amount);
        }

        if row.is_flagged_fraud {
            self.flagged_count += 1;
        }

        self.max_amount = Some(self.max_amount.map_or(row.amount, |max| max.max(row.amount)));
    }

    pub fn non_fraud_count(&self) -> u64 {
        self.count - self.fraud_count
    }

    pub fn non_fraud_amount(&self) -> Decimal {
        self.amount - self.fraud_amount
    }

    /// Share of rows labelled as fraud.
    pub fn fraud_rate_by_count(&self) -> Rate {
        Rate::from_counts(self.fraud_count, self.count)
    }

    /// Share of the total amount carried by fraudulent rows.
    pub fn fraud_rate_by_amount(&self) -> Rate {
        Rate::from_amounts(self.fraud_amount, self.amount)
    }

    pub fn non_fraud_rate_by_amount(&self) -> Rate {
        Rate::from_amounts(self.non_fraud_amount(), self.amount)
    }

    pub fn flagged_rate_by_count(&self) -> Rate {
        Rate::from_counts(self.flagged_count, self.count)
    }

    /// `None` for an empty row set.
    pub fn mean_amount(&self) -> Option<Decimal> {
        if self.count == 0 {
            return None;
        }

        self.amount.checked_div(Decimal::from(self.count))
    }
}
