use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RecordError, TransactionType};
use crate::types::{Day, Hour, Step, HOURS_PER_DAY};

/// One validated financial transfer.
///
/// Field order matches the column order of the dataset files, so serializing a `Transaction`
/// writes the same header the loader expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Discretized time, one unit per hour.
    pub step: Step,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    /// Source account.
    #[serde(rename = "nameOrig")]
    pub name_orig: String,
    /// Destination account.
    #[serde(rename = "nameDest")]
    pub name_dest: String,
    /// Ground-truth fraud label.
    #[serde(rename = "isFraud", serialize_with = "flag::serialize")]
    pub is_fraud: bool,
    /// Label assigned by the external detection system, independent of `is_fraud`.
    #[serde(rename = "isFlaggedFraud", serialize_with = "flag::serialize")]
    pub is_flagged_fraud: bool,
    pub day: Day,
    pub hour: Hour
}

impl Transaction {
    /// Builds a transaction, deriving `day` and `hour` from `step`.
    pub fn new(
        step: Step,
        transaction_type: TransactionType,
        amount: Decimal,
        name_orig: impl Into<String>,
        name_dest: impl Into<String>,
        is_fraud: bool,
        is_flagged_fraud: bool
    ) -> Self {
        Self {
            step,
            transaction_type,
            amount,
            name_orig: name_orig.into(),
            name_dest: name_dest.into(),
            is_fraud,
            is_flagged_fraud,
            day: step / HOURS_PER_DAY,
            hour: step % HOURS_PER_DAY
        }
    }

    /// True when `entity_id` is either party of the transfer.
    pub fn involves(&self, entity_id: &str) -> bool {
        self.name_orig == entity_id || self.name_dest == entity_id
    }
}

/// Represents a single row as it appears in a dataset file.
///
/// `day` and `hour` are optional because some exports only carry `step`. Conversion into a
/// [`Transaction`] derives the missing columns and rejects rows that contradict their step.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub step: Step,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: Decimal,
    #[serde(rename = "nameOrig")]
    pub name_orig: String,
    #[serde(rename = "nameDest")]
    pub name_dest: String,
    #[serde(rename = "isFraud", deserialize_with = "flag::deserialize")]
    pub is_fraud: bool,
    #[serde(rename = "isFlaggedFraud", deserialize_with = "flag::deserialize")]
    pub is_flagged_fraud: bool,
    #[serde(default)]
    pub day: Option<Day>,
    #[serde(default)]
    pub hour: Option<Hour>
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = RecordError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        if record.amount < Decimal::ZERO {
            return Err(RecordError::NegativeAmount { amount: record.amount });
        }

        let transaction = Transaction::new(
            record.step,
            record.transaction_type,
            record.amount,
            record.name_orig,
            record.name_dest,
            record.is_fraud,
            record.is_flagged_fraud
        );

        if let Some(day) = record.day.filter(|day| *day != transaction.day) {
            return Err(RecordError::DayMismatch { step: transaction.step, day, expected: transaction.day });
        }

        if let Some(hour) = record.hour.filter(|hour| *hour != transaction.hour) {
            return Err(RecordError::HourMismatch { step: transaction.step, hour, expected: transaction.hour });
        }

        Ok(transaction)
    }
}

/// Boolean columns are stored as `0`/`1`; `true`/`false` is accepted on read.
mod flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            other => Err(de::Error::custom(format!("invalid flag value '{other}', expected 0 or 1")))
        }
    }
}

/// Amounts are parsed from their text so every digit and the written scale survive.
mod amount {
    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        Decimal::from_str_exact(value.trim())
            .map_err(|error| de::Error::custom(format!("invalid amount '{value}': {error}")))
    }
}
