use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::{Transaction, TransactionType};

/// A column a table can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Type,
    Fraud,
    Flagged,
    Step,
    Day,
    Hour
}

impl Dimension {
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Type => "type",
            Dimension::Fraud => "isFraud",
            Dimension::Flagged => "isFlaggedFraud",
            Dimension::Step => "step",
            Dimension::Day => "day",
            Dimension::Hour => "hour"
        }
    }

    pub fn value_of(&self, row: &Transaction) -> KeyValue {
        match self {
            Dimension::Type => KeyValue::Type(row.transaction_type),
            Dimension::Fraud => KeyValue::Flag(row.is_fraud),
            Dimension::Flagged => KeyValue::Flag(row.is_flagged_fraud),
            Dimension::Step => KeyValue::Number(row.step),
            Dimension::Day => KeyValue::Number(row.day),
            Dimension::Hour => KeyValue::Number(row.hour)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyValue {
    Type(TransactionType),
    Flag(bool),
    Number(u32)
}

impl Display for KeyValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Type(transaction_type) => write!(formatter, "{transaction_type}"),
            KeyValue::Flag(flag) => write!(formatter, "{}", u8::from(*flag)),
            KeyValue::Number(number) => write!(formatter, "{number}")
        }
    }
}

/// One or two grouping dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    One(Dimension),
    Pair(Dimension, Dimension)
}

impl GroupBy {
    pub fn dimensions(&self) -> Vec<Dimension> {
        match self {
            GroupBy::One(dimension) => vec![*dimension],
            GroupBy::Pair(first, second) => vec![*first, *second]
        }
    }

    pub fn key_of(&self, row: &Transaction) -> GroupKey {
        match self {
            GroupBy::One(dimension) => GroupKey {
                first: dimension.value_of(row),
                second: None
            },
            GroupBy::Pair(first, second) => GroupKey {
                first: first.value_of(row),
                second: Some(second.value_of(row))
            }
        }
    }
}

/// Values of the grouping dimensions for one group, ordered like the `GroupBy` that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub first: KeyValue,
    pub second: Option<KeyValue>
}

impl Display for GroupKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(formatter, "{}, {}", self.first, second),
            None => write!(formatter, "{}", self.first)
        }
    }
}
