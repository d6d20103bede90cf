use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::fmt::{Display, Formatter};

const DISPLAY_PRECISION: usize = 3;

/// A percentage derived from `part / whole * 100`.
///
/// A zero (or overflowing) denominator produces `Undefined` rather than a NaN or a silent zero,
/// so the presentation layer can tell "0%" apart from "there was nothing to divide by".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Rate {
    Percent(f64),
    Undefined
}

impl Rate {
    pub fn from_counts(part: u64, whole: u64) -> Self {
        if whole == 0 {
            return Rate::Undefined;
        }

        Rate::Percent(part as f64 / whole as f64 * 100.0)
    }

    pub fn from_amounts(part: Decimal, whole: Decimal) -> Self {
        if whole.is_zero() {
            return Rate::Undefined;
        }

        part.checked_div(whole)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|percent| percent.to_f64())
            .map_or(Rate::Undefined, Rate::Percent)
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Rate::Percent(value) => Some(*value),
            Rate::Undefined => None
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Rate::Percent(_))
    }

    /// Sort key that places undefined rates below every defined one.
    pub(crate) fn sort_key(&self) -> f64 {
        self.percent().unwrap_or(f64::NEG_INFINITY)
    }
}

impl Display for Rate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Percent(value) => {
                let precision = formatter.precision().unwrap_or(DISPLAY_PRECISION);
                write!(formatter, "{:.precision$}%", value, precision = precision)
            }
            Rate::Undefined => write!(formatter, "undefined")
        }
    }
}
