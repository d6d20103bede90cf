use crate::types::{Day, Hour, Step};
use rust_decimal::Decimal;
use thiserror::Error;

/// Row-level violations of the transaction invariants.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Amount [{amount}] is negative")]
    NegativeAmount {
        amount: Decimal
    },
    #[error("Day [{day}] does not match step [{step}] (expected [{expected}])")]
    DayMismatch {
        step: Step,
        day: Day,
        expected: Day
    },
    #[error("Hour [{hour}] does not match step [{step}] (expected [{expected}])")]
    HourMismatch {
        step: Step,
        hour: Hour,
        expected: Hour
    }
}
