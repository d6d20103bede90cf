mod errors;
mod table;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::RecordError;
pub use table::Table;
pub use transaction::{Transaction, TransactionRecord};

/// Transfer method of a transaction, as written in the `type` column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    CashIn,
    CashOut,
    Debit,
    Payment,
    Transfer
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::CashIn => "CASH_IN",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::Debit => "DEBIT",
            TransactionType::Payment => "PAYMENT",
            TransactionType::Transfer => "TRANSFER"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
